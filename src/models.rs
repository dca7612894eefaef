use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Activities keyed by name, kept in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = Catalog::default();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Catalog, M::Error> {
                let mut catalog = Catalog::default();
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

/// Body of the page's signup and removal forms.
#[derive(Debug, Default, Deserialize)]
pub struct ParticipantForm {
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_server_order() {
        let json = r#"{
            "Zebra Club": {"description": "z", "schedule": "Mon", "max_participants": 3, "participants": []},
            "Art Studio": {"description": "a", "schedule": "Tue", "max_participants": 5, "participants": ["a@b.com"]}
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.names(), vec!["Zebra Club", "Art Studio"]);

        let round: serde_json::Value = serde_json::to_value(&catalog).unwrap();
        let keys: Vec<_> = round.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"Art Studio".to_string()));
    }

    #[test]
    fn missing_participants_defaults_to_empty() {
        let json = r#"{"Chess Club": {"description": "d", "schedule": "Fri", "max_participants": 12}}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.get("Chess Club").unwrap().participants.is_empty());
    }

    #[test]
    fn insert_replaces_existing_entry_in_place() {
        let activity = Activity {
            description: "d".into(),
            schedule: "s".into(),
            max_participants: 1,
            participants: vec![],
        };
        let mut catalog: Catalog = [
            ("A".to_string(), activity.clone()),
            ("B".to_string(), activity.clone()),
        ]
        .into_iter()
        .collect();
        catalog.insert(
            "A",
            Activity {
                max_participants: 9,
                ..activity
            },
        );
        assert_eq!(catalog.names(), vec!["A", "B"]);
        assert_eq!(catalog.get("A").unwrap().max_participants, 9);
    }
}
