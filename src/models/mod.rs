pub mod task;

pub use task::{now_millis, Task};
