use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// A venture record as returned by the detail lookup (`GET {links.self}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Venture {
    #[serde(rename = "nomeStartup", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "avaliacoes", default, deserialize_with = "lenient_list")]
    pub evaluations: Vec<Evaluation>,
    #[serde(rename = "habilidades", default, deserialize_with = "lenient_list")]
    pub skills: Vec<SkillRef>,
}

impl Venture {
    /// Ids of every skill this venture carries. Sub-records without a valid id are left out.
    pub fn skill_ids(&self) -> HashSet<i64> {
        self.skills.iter().filter_map(|s| s.skill_id).collect()
    }

    /// True if the venture carries at least one of `requested`.
    pub fn has_any_skill(&self, requested: &HashSet<i64>) -> bool {
        self.skills
            .iter()
            .filter_map(|s| s.skill_id)
            .any(|id| requested.contains(&id))
    }

    pub fn skill_names(&self) -> Vec<String> {
        self.skills
            .iter()
            .map(|s| s.name.clone())
            .filter(|n| !n.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Evaluation {
    /// `None` when the service sent no rating or something that is not a finite number
    #[serde(rename = "nota", default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
}

impl Evaluation {
    pub fn rated(rating: f64) -> Self {
        Self {
            rating: Some(rating),
        }
    }
}

/// Skill attached to a venture. Identity is the integer id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillRef {
    #[serde(rename = "idHabilidade", default, deserialize_with = "lenient_id")]
    pub skill_id: Option<i64>,
    #[serde(rename = "nomeHabilidade", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "tipoHabilidade", default, deserialize_with = "lenient_string")]
    pub kind: String,
}

impl SkillRef {
    pub fn new(id: i64, name: &str, kind: &str) -> Self {
        Self {
            skill_id: Some(id),
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }
}

/// Entry in the skill catalogue. Same wire shape as a venture's skill sub-record.
pub type Skill = SkillRef;

/// One page of the skill catalogue
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPage {
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<Skill>,
    #[serde(rename = "totalItems", default)]
    pub total_items: Option<u64>,
}

/// First page of the venture index. Entries only carry a link to the full record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VentureIndex {
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<IndexEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexEntry {
    #[serde(default)]
    pub links: Option<Links>,
}

impl IndexEntry {
    pub fn self_path(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|l| l.self_link.as_deref())
            .filter(|p| !p.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

/// Body of the venture creation call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewVenture {
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    #[serde(rename = "video")]
    pub video_url: String,
    #[serde(rename = "nomeStartup")]
    pub name: String,
    #[serde(rename = "site")]
    pub site: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "nomeResponsavel")]
    pub owner_name: String,
    #[serde(rename = "emailStartup")]
    pub owner_email: String,
    #[serde(rename = "usuarioCPF")]
    pub owner_id: String,
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|r| r.is_finite()))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Null or a non-array becomes an empty list; elements that fail to decode are dropped.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
