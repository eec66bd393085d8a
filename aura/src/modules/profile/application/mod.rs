// Profile Application Layer - 应用层
// 命令、查询处理器与服务门面

pub mod commands;
pub mod queries;
pub mod service;

pub use commands::{
    ClearProfileCommand, ClearProfileHandler, ClearProfileResponse, CommandHandler,
    SaveProfileCommand, SaveProfileHandler, SaveProfileResponse,
};
pub use queries::{
    DisplayNameHandler, DisplayNameQuery, DisplayNameResponse, GetProfileHandler,
    GetProfileQuery, GetProfileResponse, QueryHandler,
};
pub use service::ProfileService;
