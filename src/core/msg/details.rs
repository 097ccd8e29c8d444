use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieDetail;

/// Messages specific to DetailsState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailsMsg {
    // boxed to keep Msg small
    Loaded(Box<MovieDetail>),
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    OpenTrailer,
}
