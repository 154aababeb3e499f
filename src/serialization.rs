use super::ParsedName;
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for ParsedName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ParsedName", 5)?;
        state.serialize_field("honorific", self.honorific())?;
        state.serialize_field("first_name", self.first_name())?;
        state.serialize_field("initials", self.initials())?;
        state.serialize_field("last_name", self.last_name())?;
        state.serialize_field("suffix", self.suffix())?;
        state.end()
    }
}

impl ParsedName {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("string fields always encode as JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Assignment, Config};
    use super::*;

    #[test]
    fn to_json() {
        let name = ParsedName::parse("Mr. Ted Knight Esquire");
        assert_eq!(
            r#"{"honorific":"Mr.","first_name":"Ted","initials":"","last_name":"Knight","suffix":"Esq."}"#,
            name.to_json()
        );
    }

    #[test]
    fn config_from_json() {
        let config: Config =
            serde_json::from_str(r#"{"assignment":"overwrite"}"#).expect("valid config");
        assert_eq!(Assignment::Overwrite, config.assignment);
        assert!(config.multi_word_particles);

        let config: Config = serde_json::from_str("{}").expect("valid config");
        assert_eq!(Config::default(), config);
    }
}
