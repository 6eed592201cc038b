mod flow;
mod quiz;
mod results;
mod setup;

pub use flow::QuizFlowView;
pub use quiz::QuizRunnerView;
pub use results::ResultsView;
pub use setup::SetupView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
