//! 项目类型与方向：报告、课程、用户共用的两级数据分区

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::de::deserialize_scope;

// 项目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/scope.ts")]
pub enum ProgramType {
    Degree,
    Diploma,
}

impl ProgramType {
    pub const DEGREE: &'static str = "degree";
    pub const DIPLOMA: &'static str = "diploma";

    /// 导出表格使用的展示名
    pub fn display_name(&self) -> &'static str {
        match self {
            ProgramType::Degree => "Degree",
            ProgramType::Diploma => "Diploma",
        }
    }
}

impl<'de> Deserialize<'de> for ProgramType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ProgramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgramType::Degree => write!(f, "{}", ProgramType::DEGREE),
            ProgramType::Diploma => write!(f, "{}", ProgramType::DIPLOMA),
        }
    }
}

impl std::str::FromStr for ProgramType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            ProgramType::DEGREE => Ok(ProgramType::Degree),
            ProgramType::DIPLOMA => Ok(ProgramType::Diploma),
            _ => Err(format!(
                "Invalid program type: '{s}'. Supported: degree, diploma"
            )),
        }
    }
}

// 方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scope.ts")]
pub enum Stream {
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "IS")]
    Is,
    #[serde(rename = "CS")]
    Cs,
    #[serde(rename = "SE")]
    Se,
}

impl Stream {
    pub const IT: &'static str = "IT";
    pub const IS: &'static str = "IS";
    pub const CS: &'static str = "CS";
    pub const SE: &'static str = "SE";

    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::It => Stream::IT,
            Stream::Is => Stream::IS,
            Stream::Cs => Stream::CS,
            Stream::Se => Stream::SE,
        }
    }
}

impl<'de> Deserialize<'de> for Stream {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Stream {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            Stream::IT => Ok(Stream::It),
            Stream::IS => Ok(Stream::Is),
            Stream::CS => Ok(Stream::Cs),
            Stream::SE => Ok(Stream::Se),
            _ => Err(format!("Invalid stream: '{s}'. Supported: IT, IS, CS, SE")),
        }
    }
}

/// 方向/项目类型筛选参数（`all`、空值或缺省表示不筛选）
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeQuery {
    #[serde(default, deserialize_with = "deserialize_scope")]
    pub stream: Option<Stream>,
    #[serde(default, deserialize_with = "deserialize_scope")]
    pub program_type: Option<ProgramType>,
}

impl ScopeQuery {
    pub fn new(stream: Option<Stream>, program_type: Option<ProgramType>) -> Self {
        Self {
            stream,
            program_type,
        }
    }

    /// 判断记录是否落在筛选范围内
    pub fn matches(&self, stream: Stream, program_type: ProgramType) -> bool {
        self.stream.is_none_or(|s| s == stream)
            && self.program_type.is_none_or(|p| p == program_type)
    }

    pub fn describe(&self) -> (String, String) {
        (
            self.stream
                .map(|s| s.to_string())
                .unwrap_or_else(|| "all".to_string()),
            self.program_type
                .map(|p| p.to_string())
                .unwrap_or_else(|| "all".to_string()),
        )
    }
}

/// 仅含项目类型的筛选参数
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramQuery {
    #[serde(default, deserialize_with = "deserialize_scope")]
    pub program_type: Option<ProgramType>,
}

impl From<ProgramQuery> for ScopeQuery {
    fn from(query: ProgramQuery) -> Self {
        ScopeQuery::new(None, query.program_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_type_parse_is_case_insensitive() {
        assert_eq!("Degree".parse::<ProgramType>(), Ok(ProgramType::Degree));
        assert_eq!(" diploma ".parse::<ProgramType>(), Ok(ProgramType::Diploma));
        assert!("masters".parse::<ProgramType>().is_err());
    }

    #[test]
    fn test_stream_roundtrip_uses_upper_case() {
        assert_eq!("cs".parse::<Stream>(), Ok(Stream::Cs));
        assert_eq!(serde_json::to_string(&Stream::Se).unwrap(), "\"SE\"");
    }

    #[test]
    fn test_scope_query_all_means_unfiltered() {
        let query: ScopeQuery =
            serde_json::from_str(r#"{"stream":"all","programType":"diploma"}"#).unwrap();
        assert_eq!(query.stream, None);
        assert_eq!(query.program_type, Some(ProgramType::Diploma));
        assert!(query.matches(Stream::Is, ProgramType::Diploma));
        assert!(!query.matches(Stream::Is, ProgramType::Degree));
    }

    #[test]
    fn test_scope_query_blank_and_missing() {
        let query: ScopeQuery = serde_json::from_str(r#"{"stream":""}"#).unwrap();
        assert_eq!(query.stream, None);
        assert_eq!(query.program_type, None);
        assert!(query.matches(Stream::It, ProgramType::Degree));
    }

    #[test]
    fn test_scope_query_rejects_unknown_stream() {
        let result = serde_json::from_str::<ScopeQuery>(r#"{"stream":"ME"}"#);
        assert!(result.is_err());
    }
}
