//! Visual treatment of targets as they light up and go dark

use reflex_core::TargetId;

/// Receives activation changes so the rendering side can restyle targets.
pub trait TargetPresenter {
    fn activated(&mut self, id: TargetId);
    fn deactivated(&mut self, id: TargetId);
}

/// Presenter for headless runs
#[derive(Debug, Default)]
pub struct NullPresenter;

impl TargetPresenter for NullPresenter {
    fn activated(&mut self, _id: TargetId) {}
    fn deactivated(&mut self, _id: TargetId) {}
}
