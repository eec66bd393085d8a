use thiserror::Error;

use crate::modules::chat::ApplicationError;
use crate::modules::profile::ProfileError;

/// 应用级错误，聚合各模块错误供门面使用
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Chat error: {0}")]
    Chat(#[from] ApplicationError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
}

pub type AppResult<T> = Result<T, AppError>;
