use rusqlite::Row;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A stored row exposed by one of the panel GET routes.
pub trait StoredRecord: Serialize + Sized + Send + 'static {
    const TABLE: &'static str;
    /// Key wrapping the row array in the response body.
    const COLLECTION: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    pub id: i64,
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub mensagem: Option<String>,
    pub data: Option<String>,
}

impl StoredRecord for FeedbackRecord {
    const TABLE: &'static str = "feedbacks";
    const COLLECTION: &'static str = "feedbacks";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            nome: row.get("nome")?,
            tipo: row.get("tipo")?,
            mensagem: row.get("mensagem")?,
            data: row.get("data")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionRecord {
    pub id: i64,
    pub nome: Option<String>,
    pub categoria: Option<String>,
    pub mensagem: Option<String>,
    pub data: Option<String>,
}

impl StoredRecord for SuggestionRecord {
    const TABLE: &'static str = "sugestoes";
    const COLLECTION: &'static str = "sugestoes";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            nome: row.get("nome")?,
            categoria: row.get("categoria")?,
            mensagem: row.get("mensagem")?,
            data: row.get("data")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplaintRecord {
    pub id: i64,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub tipo: Option<String>,
    pub descricao: Option<String>,
    pub endereco: Option<String>,
    pub data: Option<String>,
}

impl StoredRecord for ComplaintRecord {
    const TABLE: &'static str = "denuncias";
    const COLLECTION: &'static str = "denuncias";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            nome: row.get("nome")?,
            email: row.get("email")?,
            telefone: row.get("telefone")?,
            tipo: row.get("tipo")?,
            descricao: row.get("descricao")?,
            endereco: row.get("endereco")?,
            data: row.get("data")?,
        })
    }
}

/// Serializes as `{ "<collection>": [rows...] }`.
#[derive(Debug)]
pub struct Listing<R>(pub Vec<R>);

impl<R: StoredRecord> Serialize for Listing<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(R::COLLECTION, &self.0)?;
        map.end()
    }
}

/// Body of a 201 response.
#[derive(Debug, Serialize)]
pub struct Created {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}
