use thiserror::Error;

/// Why a geometry query could not be answered yet.
///
/// These never leave the synchronizer's event handlers; an update that hits
/// one is deferred until the layout catches up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("tab {index} is out of range (tab count {count})")]
    TabOutOfRange { index: usize, count: usize },
    #[error("tab {0} has not been measured")]
    TabNotMeasured(usize),
    #[error("strip viewport width has not been measured")]
    ContainerNotMeasured,
    #[error("strip content width has not been measured")]
    StripNotMeasured,
}
