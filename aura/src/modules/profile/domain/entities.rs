// Profile Domain Entities
//
// 用户档案实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{Age, DisplayName};

/// 用户档案
///
/// 聚合根：对话个性化所需的登录状态（称呼与年龄）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// 用户称呼
    name: DisplayName,
    /// 用户年龄
    age: Age,
    /// 创建时间
    created_at: DateTime<Utc>,
}

impl UserProfile {
    /// 创建新档案
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: DisplayName::new(name),
            age: Age::new(age),
            created_at: Utc::now(),
        }
    }

    // Getters
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // 业务方法

    /// 更新称呼
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = DisplayName::new(name);
    }

    /// 更新年龄
    pub fn set_age(&mut self, age: u32) {
        self.age = Age::new(age);
    }

    /// 验证档案是否有效
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.name.is_valid() {
            errors.push("Display name cannot be blank".to_string());
        }
        if !self.age.is_valid() {
            errors.push("Age must be between 1 and 120".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_profile() {
        let profile = UserProfile::new("Mei", 25);
        assert_eq!(profile.name().as_str(), "Mei");
        assert_eq!(profile.age().value(), 25);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_invalid_profile() {
        let profile = UserProfile::new("  ", 0);
        let errors = profile.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_rename() {
        let mut profile = UserProfile::new("Mei", 25);
        profile.rename("Yuki");
        assert_eq!(profile.name().as_str(), "Yuki");
    }
}
