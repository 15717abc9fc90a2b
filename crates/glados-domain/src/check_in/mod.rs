mod account_result;
mod gateway;
mod value_objects;


pub use account_result::{AccountResult, AccountResultBuilder, ProcessingStage, UNKNOWN_EMAIL};
pub use gateway::CheckInGateway;
pub use value_objects::{
    CheckInOutcome, CheckInReply, CheckInStatus, PointsReply, StatusReply,
    CODE_ALREADY_CHECKED, CODE_CREDENTIAL_INVALID, CODE_SUCCESS,
};
