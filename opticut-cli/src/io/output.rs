use crate::config::OptiCutConfig;
use opticut::io::ext_repr::{ExtJob, ExtReport};
use serde::{Deserialize, Serialize};

/// Everything written to the solution JSON: the job, its report and the configuration used
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JobOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    pub report: ExtReport,
    pub config: OptiCutConfig,
}
