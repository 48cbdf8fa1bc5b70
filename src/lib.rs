mod error;
pub use error::PipelineError;

mod separator;
pub use separator::{is_separator, tokenize, SEPARATORS};

mod weight;
pub use weight::weight;

mod job;
pub use job::JobDescription;

mod partitioner;
pub use partitioner::partition;

mod mapper;
pub use mapper::{run_map_task, MapResult, MapTask};

mod reducer;
pub use reducer::{run_reduce_task, ReduceResult, ReduceTask};

mod worker_pool;
pub use worker_pool::{split_round_robin, Worker};

mod orchestrator;
pub use orchestrator::Orchestrator;

pub mod report;
