use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Quantity used when a create request leaves it out.
pub const DEFAULT_QUANTITY: i64 = 1;

/// One shopping-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier, never reused
    pub id: i64,
    /// Trimmed, non-empty name
    pub name: String,
    /// Always at least 1
    pub quantity: i64,
    pub purchased: bool,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "Name is required and must be a non-empty string"))]
    pub name: String,
    #[validate(range(min = 1, message = "Quantity must be a positive number"))]
    #[schema(default = 1, minimum = 1)]
    pub quantity: i64,
}

/// Validated partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, message = "Name must be a non-empty string"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "Quantity must be a positive number"))]
    #[schema(minimum = 1)]
    pub quantity: Option<i64>,
    pub purchased: Option<bool>,
}

impl Item {
    /// Create a new item from CreateItem DTO
    pub fn new(id: i64, input: CreateItem) -> Self {
        let now = now_millis();
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            purchased: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateItem DTO
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(purchased) = update.purchased {
            self.purchased = purchased;
        }
        self.updated_at = next_timestamp(self.updated_at);
    }
}

/// Current time truncated to the millisecond precision used on the wire.
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Timestamp strictly after `previous`, even if the clock has not moved.
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now_millis();
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}
