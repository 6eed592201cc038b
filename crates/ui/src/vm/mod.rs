mod results_vm;
mod setup_vm;
mod time_fmt;

pub use results_vm::{
    ResultRowVm, display_correct_answer, display_user_answer, map_result_rows, option_letter,
};
pub use setup_vm::{SetupSubmission, can_submit};
pub use time_fmt::format_duration;
