#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Meals per day must be in the range 3 to 6 ({0} given)")]
    MealsPerDayOutOfRange(u8),
    #[error("Plan length must be in the range 1 to 31 days ({0} given)")]
    PlanDaysOutOfRange(u32),
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),
    #[error(transparent)]
    Read(#[from] ReadError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("no session")]
    NoSession,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
