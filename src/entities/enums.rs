//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::mysql::{MySql, MySqlTypeInfo, MySqlValueRef};
use sqlx::{Database, Decode, Encode, Type};
use std::fmt;
use std::str::FromStr;

/// Categoria della moto, salvata come colonna `ENUM` MySQL
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorcycleCategory {
    Street,
    Custom,
    Trail,
}

impl MotorcycleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Street => "Street",
            Self::Custom => "Custom",
            Self::Trail => "Trail",
        }
    }
}

impl fmt::Display for MotorcycleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotorcycleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Street" => Ok(Self::Street),
            "Custom" => Ok(Self::Custom),
            "Trail" => Ok(Self::Trail),
            other => Err(format!("unknown motorcycle category: {other}")),
        }
    }
}

// Le colonne ENUM arrivano con flag NOT_NULL/NO_DEFAULT_VALUE: la compatibilità
// segue quella delle stringhe.
impl Type<MySql> for MotorcycleCategory {
    fn type_info() -> MySqlTypeInfo {
        <str as Type<MySql>>::type_info()
    }

    fn compatible(ty: &MySqlTypeInfo) -> bool {
        <str as Type<MySql>>::compatible(ty)
    }
}

impl<'q> Encode<'q, MySql> for MotorcycleCategory {
    fn encode_by_ref(
        &self,
        buf: &mut <MySql as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <&str as Encode<'q, MySql>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> Decode<'r, MySql> for MotorcycleCategory {
    fn decode(value: MySqlValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <&str as Decode<'r, MySql>>::decode(value)?;
        Ok(raw.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn column_type(flags: &str) -> MySqlTypeInfo {
        serde_json::from_value(json!({ "type": "String", "flags": flags }))
            .expect("valid column type info")
    }

    #[test]
    fn test_not_null_enum_column_is_compatible() {
        let column = column_type("NOT_NULL | ENUM | NO_DEFAULT_VALUE");
        assert!(<MotorcycleCategory as Type<MySql>>::compatible(&column));
    }

    #[test]
    fn test_nullable_enum_column_is_compatible() {
        let column = column_type("ENUM");
        assert!(<MotorcycleCategory as Type<MySql>>::compatible(&column));
    }

    #[test]
    fn test_category_parses_from_column_text() {
        assert_eq!("Trail".parse::<MotorcycleCategory>(), Ok(MotorcycleCategory::Trail));
        assert_eq!(MotorcycleCategory::Custom.to_string(), "Custom");
        assert!("street".parse::<MotorcycleCategory>().is_err());
    }
}
