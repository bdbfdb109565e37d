use thiserror::Error;

use crate::input::InputError;
use crate::model::item::ItemId;
use crate::model::thresholds::ProfileError;
use crate::pipeline::stage3_rank::MatchError;
use crate::pipeline::stage5_report::ReportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("item {0} is not in the catalog")]
    UnknownItem(ItemId),
}
