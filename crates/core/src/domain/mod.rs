// Domain Layer - Codes, Statuses, Envelopes, Tasks, Messages

pub mod codes;
pub mod envelope;
pub mod message;
pub mod status;
pub mod task;

pub use codes::{CodeTable, ResultCode};
pub use envelope::{EnvelopeConvention, ResponseEnvelope};
pub use message::DisplayMessage;
pub use status::TaskStatus;
pub use task::{CompileSection, ExecuteSection, ResultSection, Task, TaskBrief};
