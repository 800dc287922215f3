use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::AppError;

/// One column of a submission, bound into the insert in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub column: &'static str,
    pub value: Option<&'a str>,
    pub required: bool,
}

impl<'a> Field<'a> {
    fn required(column: &'static str, value: &'a Option<String>) -> Self {
        Self {
            column,
            value: non_blank(value),
            required: true,
        }
    }

    fn optional(column: &'static str, value: &'a Option<String>) -> Self {
        Self {
            column,
            value: non_blank(value),
            required: false,
        }
    }
}

/// Blank strings are stored as NULL.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// A record kind accepted by one of the POST routes.
pub trait Submission: DeserializeOwned + Debug + Send + 'static {
    /// Name used in log lines.
    const KIND: &'static str;
    const TABLE: &'static str;
    /// Body of the 400 response when a required field is missing.
    const MISSING_FIELDS: &'static str;
    /// Acknowledgment returned with the 201.
    const CREATED: &'static str;
    /// Whether the 201 body carries the new row id.
    const RETURNS_ID: bool;
    /// Body of the 500 response when the insert fails.
    const STORAGE_FAILURE: &'static str = "Erro ao salvar registro.";

    fn fields(&self) -> Vec<Field<'_>>;

    fn validate(&self) -> Result<(), AppError> {
        let complete = self
            .fields()
            .iter()
            .filter(|f| f.required)
            .all(|f| f.value.is_some());
        if complete {
            Ok(())
        } else {
            Err(AppError::Validation(Self::MISSING_FIELDS))
        }
    }
}

/// POST /contato
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub mensagem: Option<String>,
}

impl Submission for ContactForm {
    const KIND: &'static str = "Contato";
    const TABLE: &'static str = "contatos";
    const MISSING_FIELDS: &'static str = "Campos obrigatórios.";
    const CREATED: &'static str = "Contato enviado!";
    const RETURNS_ID: bool = false;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::optional("nome", &self.nome),
            Field::required("email", &self.email),
            Field::optional("telefone", &self.telefone),
            Field::required("mensagem", &self.mensagem),
        ]
    }
}

/// POST /acesso
#[derive(Debug, Default, Deserialize)]
pub struct AccessRequestForm {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub orgao: Option<String>,
    pub tipo: Option<String>,
    pub descricao: Option<String>,
    pub formato: Option<String>,
    pub finalidade: Option<String>,
}

impl Submission for AccessRequestForm {
    const KIND: &'static str = "Pedido de acesso";
    const TABLE: &'static str = "acessos";
    const MISSING_FIELDS: &'static str = "Campos obrigatórios ausentes.";
    const CREATED: &'static str = "Pedido registrado.";
    const RETURNS_ID: bool = false;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::optional("nome", &self.nome),
            Field::required("email", &self.email),
            Field::required("orgao", &self.orgao),
            Field::required("tipo", &self.tipo),
            Field::required("descricao", &self.descricao),
            Field::optional("formato", &self.formato),
            Field::optional("finalidade", &self.finalidade),
        ]
    }
}

/// POST /feedback
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackForm {
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub mensagem: Option<String>,
}

impl Submission for FeedbackForm {
    const KIND: &'static str = "Feedback";
    const TABLE: &'static str = "feedbacks";
    const MISSING_FIELDS: &'static str = "Campos obrigatórios.";
    const CREATED: &'static str = "Feedback salvo";
    const RETURNS_ID: bool = true;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::optional("nome", &self.nome),
            Field::required("tipo", &self.tipo),
            Field::required("mensagem", &self.mensagem),
        ]
    }
}

/// POST /sugestao
#[derive(Debug, Default, Deserialize)]
pub struct SuggestionForm {
    pub nome: Option<String>,
    pub categoria: Option<String>,
    pub mensagem: Option<String>,
}

impl Submission for SuggestionForm {
    const KIND: &'static str = "Sugestão";
    const TABLE: &'static str = "sugestoes";
    const MISSING_FIELDS: &'static str = "Campos obrigatórios.";
    const CREATED: &'static str = "Sugestão salva";
    const RETURNS_ID: bool = true;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::optional("nome", &self.nome),
            Field::required("categoria", &self.categoria),
            Field::required("mensagem", &self.mensagem),
        ]
    }
}

/// POST /denuncias
#[derive(Debug, Default, Deserialize)]
pub struct ComplaintForm {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub tipo: Option<String>,
    pub descricao: Option<String>,
    pub endereco: Option<String>,
}

impl Submission for ComplaintForm {
    const KIND: &'static str = "Denúncia";
    const TABLE: &'static str = "denuncias";
    const MISSING_FIELDS: &'static str = "Campos obrigatórios: tipo e descricao.";
    const CREATED: &'static str = "Denúncia cadastrada com sucesso!";
    const RETURNS_ID: bool = true;
    const STORAGE_FAILURE: &'static str = "Erro ao salvar denúncia.";

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::optional("nome", &self.nome),
            Field::optional("email", &self.email),
            Field::optional("telefone", &self.telefone),
            Field::required("tipo", &self.tipo),
            Field::required("descricao", &self.descricao),
            Field::optional("endereco", &self.endereco),
        ]
    }
}
