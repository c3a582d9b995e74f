use serde::{Deserialize, Serialize};

/// Payload de `POST /empresas/cadastrar`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompanyRegistration {
    pub nome: String,
    pub cnpj: String,
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub cep: String,
    pub id_estado: String,
    pub ramo_atividade: String,
    pub email: String,
}

impl CompanyRegistration {
    /// CNPJ apenas com dígitos
    pub fn normalized_cnpj(&self) -> String {
        self.cnpj.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Lista de problemas de preenchimento; vazia quando o formulário pode ser enviado
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let required = [
            ("Nome", &self.nome),
            ("CNPJ", &self.cnpj),
            ("Logradouro", &self.logradouro),
            ("Número", &self.numero),
            ("Cidade", &self.cidade),
            ("Estado", &self.id_estado),
            ("Ramo de atividade", &self.ramo_atividade),
            ("E-mail", &self.email),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                problems.push(format!("{} é obrigatório", label));
            }
        }

        if !self.cnpj.trim().is_empty() && self.normalized_cnpj().len() != 14 {
            problems.push("CNPJ deve ter 14 dígitos".to_string());
        }

        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            problems.push("E-mail inválido".to_string());
        }

        problems
    }

    /// Cópia pronta para envio (campos aparados e CNPJ só com dígitos)
    pub fn normalized(&self) -> Self {
        Self {
            nome: self.nome.trim().to_string(),
            cnpj: self.normalized_cnpj(),
            logradouro: self.logradouro.trim().to_string(),
            numero: self.numero.trim().to_string(),
            bairro: self.bairro.trim().to_string(),
            cidade: self.cidade.trim().to_string(),
            cep: self.cep.chars().filter(|c| c.is_ascii_digit()).collect(),
            id_estado: self.id_estado.trim().to_string(),
            ramo_atividade: self.ramo_atividade.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CompanyRegistration {
        CompanyRegistration {
            nome: "Padaria Central".into(),
            cnpj: "12.345.678/0001-95".into(),
            logradouro: "Rua A".into(),
            numero: "10".into(),
            bairro: "Centro".into(),
            cidade: "Campinas".into(),
            cep: "13010-000".into(),
            id_estado: "25".into(),
            ramo_atividade: "Alimentação".into(),
            email: "contato@padaria.com.br".into(),
        }
    }

    #[test]
    fn filled_form_is_valid() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn short_cnpj_and_bad_email_are_reported() {
        let mut form = filled();
        form.cnpj = "123".into();
        form.email = "contato".into();
        let problems = form.validate();
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.contains("14 dígitos")));
    }

    #[test]
    fn normalized_strips_punctuation() {
        let form = filled().normalized();
        assert_eq!(form.cnpj, "12345678000195");
        assert_eq!(form.cep, "13010000");
    }

    #[test]
    fn empty_form_lists_required_fields() {
        let problems = CompanyRegistration::default().validate();
        assert_eq!(problems.len(), 8);
    }
}
