pub mod events;
pub mod forms;
pub mod forwarding;
pub mod recruitment;
