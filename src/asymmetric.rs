//! 公钥加密模块

pub mod systems;
