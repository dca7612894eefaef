use crate::errors::AppError;
use crate::models::{Activity, Catalog};
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Club",
        "Practice skills, scrimmages, and local matches",
        "Mondays and Thursdays, 4:00 PM - 6:00 PM",
        25,
        &["alex@mergington.edu", "maria@mergington.edu"],
    ),
    (
        "Track and Field",
        "Running, jumping and throwing events with weekly meets",
        "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
        40,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Drama Club",
        "Acting workshops and productions for all levels",
        "Wednesdays, 4:00 PM - 6:00 PM",
        30,
        &["ava@mergington.edu", "isabella@mergington.edu"],
    ),
    (
        "Art Studio",
        "Drawing, painting and mixed-media projects",
        "Thursdays, 3:30 PM - 5:30 PM",
        20,
        &["charlie@mergington.edu", "zara@mergington.edu"],
    ),
    (
        "Debate Team",
        "Practice public speaking, argumentation and compete regionally",
        "Mondays, 3:30 PM - 5:00 PM",
        18,
        &["oliver@mergington.edu", "grace@mergington.edu"],
    ),
    (
        "Robotics Club",
        "Design and build robots, prepare for competitions",
        "Tuesdays and Thursdays, 5:00 PM - 7:00 PM",
        15,
        &["ethan@mergington.edu", "mia@mergington.edu"],
    ),
];

pub fn seed_catalog() -> Catalog {
    SEED.iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

/// Reads the catalog from `path`, falling back to the seed when the file is
/// absent or unreadable.
pub async fn load_catalog(path: Option<&Path>) -> Catalog {
    let Some(path) = path else {
        return seed_catalog();
    };
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!("failed to parse catalog file: {err}");
                seed_catalog()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no catalog at {}, using seed", path.display());
            seed_catalog()
        }
        Err(err) => {
            error!("failed to read catalog file: {err}");
            seed_catalog()
        }
    }
}

pub async fn persist_catalog(path: &Path, catalog: &Catalog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(catalog).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_nine_activities_in_order() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.names()[0], "Chess Club");
        assert_eq!(catalog.names()[8], "Robotics Club");
        assert_eq!(catalog.get("Debate Team").unwrap().max_participants, 18);
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_seed() {
        let mut path = std::env::temp_dir();
        path.push(format!("activity_board_missing_{}.json", std::process::id()));
        assert_eq!(load_catalog(Some(&path)).await, seed_catalog());
    }

    #[tokio::test]
    async fn persisted_catalog_loads_back() {
        let mut path = std::env::temp_dir();
        path.push(format!("activity_board_roundtrip_{}.json", std::process::id()));
        let mut catalog = seed_catalog();
        catalog
            .get_mut("Chess Club")
            .unwrap()
            .participants
            .push("new@mergington.edu".into());

        persist_catalog(&path, &catalog).await.unwrap();
        let loaded = load_catalog(Some(&path)).await;
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, catalog);
    }
}
