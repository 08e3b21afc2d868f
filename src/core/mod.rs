pub mod buildcore;
pub mod generics;
pub mod log;
pub mod queue;
