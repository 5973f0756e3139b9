//! Value objects participating in the Evento invariants.

use std::fmt;
use std::str::FromStr;

use agenda_core::id::IdGenerator;
use serde::{Deserialize, Serialize};

use super::errors::EventoError;

/// Namespace handed to the [`IdGenerator`] for Evento identifiers.
pub const EVENTO_NAMESPACE: &str = "evento";

/// Opaque, non-empty identifier of an Evento.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventoId(String);

impl EventoId {
    /// Wraps an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns `EventoError::InvalidIdentifier` if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, EventoError> {
        let value = value.into();
        if value.is_empty() {
            return Err(EventoError::InvalidIdentifier);
        }
        Ok(Self(value))
    }

    /// Requests a fresh identifier in the `"evento"` namespace.
    ///
    /// # Errors
    ///
    /// Returns `EventoError::InvalidIdentifier` if the generator yields an
    /// empty string.
    pub fn generate(ids: &dyn IdGenerator) -> Result<Self, EventoError> {
        Self::new(ids.new_id(EVENTO_NAMESPACE))
    }

    /// The underlying string, used as the repository key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EventoId {
    type Err = EventoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EventoId {
    type Error = EventoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventoId> for String {
    fn from(id: EventoId) -> Self {
        id.0
    }
}

/// Venue snapshot. Field values are taken as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localizacao {
    id: String,
    nome: String,
    endereco: String,
    capacidade: u32,
}

impl Localizacao {
    /// Creates a venue snapshot.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        nome: impl Into<String>,
        endereco: impl Into<String>,
        capacidade: u32,
    ) -> Self {
        Self {
            id: id.into(),
            nome: nome.into(),
            endereco: endereco.into(),
            capacidade,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn nome(&self) -> &str {
        &self.nome
    }

    #[must_use]
    pub fn endereco(&self) -> &str {
        &self.endereco
    }

    #[must_use]
    pub const fn capacidade(&self) -> u32 {
        self.capacidade
    }
}

/// Performer snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artista {
    id: String,
    nome: String,
    genero: String,
}

impl Artista {
    /// Creates a performer snapshot.
    #[must_use]
    pub fn new(id: impl Into<String>, nome: impl Into<String>, genero: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nome: nome.into(),
            genero: genero.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn nome(&self) -> &str {
        &self.nome
    }

    #[must_use]
    pub fn genero(&self) -> &str {
        &self.genero
    }
}

/// Ordered, non-empty list of artists.
///
/// Never mutated after construction: a new line-up replaces the old one
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Artista>", into = "Vec<Artista>")]
pub struct LineUp {
    artistas: Vec<Artista>,
}

impl LineUp {
    /// Builds a line-up, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `EventoError::EmptyLineUp` if `artistas` is empty.
    pub fn new(artistas: Vec<Artista>) -> Result<Self, EventoError> {
        if artistas.is_empty() {
            return Err(EventoError::EmptyLineUp);
        }
        Ok(Self { artistas })
    }

    /// Returns a freshly allocated copy of the artists, in order.
    #[must_use]
    pub fn artistas(&self) -> Vec<Artista> {
        self.artistas.clone()
    }

    /// Borrows the artists without copying.
    pub fn iter(&self) -> std::slice::Iter<'_, Artista> {
        self.artistas.iter()
    }
}

impl TryFrom<Vec<Artista>> for LineUp {
    type Error = EventoError;

    fn try_from(artistas: Vec<Artista>) -> Result<Self, Self::Error> {
        Self::new(artistas)
    }
}

impl From<LineUp> for Vec<Artista> {
    fn from(line_up: LineUp) -> Self {
        line_up.artistas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_test_support::{BlankIdGenerator, SequenceIdGenerator};

    fn artista(id: &str, genero: &str) -> Artista {
        Artista::new(id, format!("Artista {id}"), genero)
    }

    #[test]
    fn test_evento_id_rejects_empty_value() {
        assert_eq!(EventoId::new(""), Err(EventoError::InvalidIdentifier));
        assert_eq!("".parse::<EventoId>(), Err(EventoError::InvalidIdentifier));
    }

    #[test]
    fn test_evento_id_equality_follows_underlying_string() {
        let a = EventoId::new("e1").unwrap();
        let b: EventoId = "e1".parse().unwrap();

        assert_eq!(a, b);
        assert_eq!(a.to_string(), "e1");
        assert_ne!(a, EventoId::new("e2").unwrap());
    }

    #[test]
    fn test_evento_id_generated_in_evento_namespace() {
        let ids = SequenceIdGenerator::new();

        let first = EventoId::generate(&ids).unwrap();
        let second = EventoId::generate(&ids).unwrap();

        assert_eq!(first.as_str(), "evento-1");
        assert_eq!(second.as_str(), "evento-2");
    }

    #[test]
    fn test_evento_id_generation_fails_when_generator_yields_empty() {
        let result = EventoId::generate(&BlankIdGenerator);

        assert_eq!(result, Err(EventoError::InvalidIdentifier));
    }

    #[test]
    fn test_evento_id_deserialization_validates() {
        let ok: EventoId = serde_json::from_str("\"evento-7\"").unwrap();
        assert_eq!(ok.as_str(), "evento-7");

        assert!(serde_json::from_str::<EventoId>("\"\"").is_err());
    }

    #[test]
    fn test_localizacao_accepts_values_as_given() {
        let local = Localizacao::new("1", "Local Test", "Endereço Test", 0);

        assert_eq!(local.id(), "1");
        assert_eq!(local.nome(), "Local Test");
        assert_eq!(local.endereco(), "Endereço Test");
        assert_eq!(local.capacidade(), 0);
    }

    #[test]
    fn test_line_up_rejects_empty_list() {
        assert_eq!(LineUp::new(Vec::new()), Err(EventoError::EmptyLineUp));
    }

    #[test]
    fn test_line_up_preserves_order() {
        let artistas = vec![artista("1", "Rock"), artista("2", "Pop"), artista("3", "Jazz")];

        let line_up = LineUp::new(artistas.clone()).unwrap();

        assert_eq!(line_up.artistas(), artistas);
        let generos: Vec<&str> = line_up.iter().map(Artista::genero).collect();
        assert_eq!(generos, ["Rock", "Pop", "Jazz"]);
    }

    #[test]
    fn test_line_up_read_is_a_defensive_copy() {
        let line_up = LineUp::new(vec![artista("1", "Rock")]).unwrap();

        let mut copy = line_up.artistas();
        copy.push(artista("2", "Pop"));
        copy[0] = artista("9", "Metal");

        assert_eq!(line_up.artistas(), vec![artista("1", "Rock")]);
    }

    #[test]
    fn test_line_up_deserialization_rejects_empty_array() {
        let parsed: LineUp =
            serde_json::from_str(r#"[{"id":"1","nome":"Artista Test","genero":"Rock"}]"#).unwrap();
        assert_eq!(parsed.artistas()[0].genero(), "Rock");

        assert!(serde_json::from_str::<LineUp>("[]").is_err());
    }
}
