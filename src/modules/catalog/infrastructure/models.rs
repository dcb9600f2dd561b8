use crate::modules::catalog::domain::GameRecord;
use crate::schema::games;
use chrono::NaiveDate;
use diesel::prelude::*;

// For reading catalog rows
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = games)]
pub struct GameModel {
    pub id: i32,
    pub title: String,
    pub platform: String,
    pub cover_image: Option<String>,
    pub rating: Option<f32>,
    pub released: Option<NaiveDate>,
}

impl From<GameModel> for GameRecord {
    fn from(model: GameModel) -> Self {
        GameRecord {
            id: model.id,
            title: model.title,
            platform: model.platform,
            cover_image: model.cover_image,
            rating: model.rating,
            released: model.released,
        }
    }
}
