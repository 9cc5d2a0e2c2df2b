//! Backend record entities and the HTTP client that lists them.
//!
//! Field names follow the operation backend's JSON (Portuguese column
//! aliases); the structs expose them under English names via serde renames.

use serde::Deserialize;

/// A structured street address as registered on a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub postal_code: String,
}

impl Address {
    /// Free-form "street, number, neighborhood, city, postal" query string
    /// sent to the geocoder.
    pub fn query(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.street, self.number, self.neighborhood, self.city, self.postal_code
        )
    }
}

/// A lodging where crews are housed.
#[derive(Debug, Clone, Deserialize)]
pub struct Lodging {
    pub id: i64,
    #[serde(rename = "rua")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "moradores", default)]
    pub residents: Option<i64>,
    #[serde(rename = "ativa", default)]
    pub active: Option<bool>,
}

impl Lodging {
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            number: self.number.clone(),
            neighborhood: self.neighborhood.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

/// A work site ("canteiro") where crews are deployed.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkSite {
    pub id: i64,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "responsavel")]
    pub supervisor: String,
    #[serde(rename = "rua")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "complemento", default)]
    pub complement: Option<String>,
    #[serde(rename = "estado", default)]
    pub state: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl WorkSite {
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            number: self.number.clone(),
            neighborhood: self.neighborhood.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

/// A work order joining an employee, a service role and a work site.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkOrder {
    pub id: i64,
    #[serde(rename = "data_criacao")]
    pub created_at: String,
    #[serde(rename = "funcionario_nome")]
    pub employee_name: String,
    #[serde(rename = "funcionario_matricula")]
    pub employee_badge: String,
    #[serde(rename = "servico_funcao")]
    pub service_role: String,
    #[serde(rename = "servico_id")]
    pub service_id: i64,
    #[serde(rename = "canteiro_id")]
    pub work_site_id: i64,
    #[serde(rename = "canteiro_codigo")]
    pub work_site_code: String,
    #[serde(rename = "canteiro_responsavel")]
    pub work_site_supervisor: String,
    #[serde(rename = "canteiro_rua")]
    pub work_site_street: String,
    #[serde(rename = "canteiro_numero")]
    pub work_site_number: String,
    #[serde(rename = "canteiro_bairro")]
    pub work_site_neighborhood: String,
    #[serde(rename = "canteiro_cidade")]
    pub work_site_city: String,
    #[serde(rename = "canteiro_cep")]
    pub work_site_postal_code: String,
}

impl WorkOrder {
    /// Address of the work site this order is bound to.
    pub fn site_address(&self) -> Address {
        Address {
            street: self.work_site_street.clone(),
            number: self.work_site_number.clone(),
            neighborhood: self.work_site_neighborhood.clone(),
            city: self.work_site_city.clone(),
            postal_code: self.work_site_postal_code.clone(),
        }
    }
}

/// A fleet vehicle assignable to a route.
#[derive(Debug, Clone, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    #[serde(rename = "frota")]
    pub fleet: String,
    #[serde(rename = "tipo_veiculo")]
    pub vehicle_type: String,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "capacidade")]
    pub capacity: i64,
}

#[derive(Debug, Clone)]
pub struct RecordsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Blocking client for the operation backend's list endpoints.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    config: RecordsConfig,
    client: reqwest::blocking::Client,
}

impl RecordsClient {
    pub fn new(config: RecordsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn lodgings(&self) -> Result<Vec<Lodging>, reqwest::Error> {
        self.list("/funcionarios/alojamentos")
    }

    pub fn work_sites(&self) -> Result<Vec<WorkSite>, reqwest::Error> {
        self.list("/canteiros")
    }

    pub fn work_orders(&self) -> Result<Vec<WorkOrder>, reqwest::Error> {
        self.list("/ordens")
    }

    pub fn vehicles(&self) -> Result<Vec<Vehicle>, reqwest::Error> {
        self.list("/veiculos")
    }

    fn list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, reqwest::Error> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%url, "listing records");
        self.client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<T>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_query_joins_fields() {
        let address = Address {
            street: "Rua Vinte e Dois".to_string(),
            number: "1540".to_string(),
            neighborhood: "Centro".to_string(),
            city: "Ituiutaba".to_string(),
            postal_code: "38300-084".to_string(),
        };
        assert_eq!(
            address.query(),
            "Rua Vinte e Dois, 1540, Centro, Ituiutaba, 38300-084"
        );
    }

    #[test]
    fn lodging_deserializes_from_backend_fields() {
        let json = r#"{
            "id": 7,
            "rua": "Rua Vinte e Dois",
            "numero": "1540",
            "bairro": "Centro",
            "cidade": "Ituiutaba",
            "cep": "38300-084"
        }"#;
        let lodging: Lodging = serde_json::from_str(json).unwrap();
        assert_eq!(lodging.id, 7);
        assert_eq!(lodging.address().city, "Ituiutaba");
        assert!(lodging.residents.is_none());
    }

    #[test]
    fn work_order_exposes_site_address() {
        let json = r#"{
            "id": 12,
            "data_criacao": "2025-05-02",
            "funcionario_nome": "Carlos Souza",
            "funcionario_matricula": "F-0042",
            "servico_funcao": "Eletricista",
            "servico_id": 3,
            "canteiro_id": 3,
            "canteiro_codigo": "CT-03",
            "canteiro_responsavel": "Marina Lopes",
            "canteiro_rua": "Avenida Nove",
            "canteiro_numero": "210",
            "canteiro_bairro": "Alvorada",
            "canteiro_cidade": "Ituiutaba",
            "canteiro_cep": "38302-102"
        }"#;
        let order: WorkOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.work_site_id, 3);
        assert_eq!(order.site_address().street, "Avenida Nove");
    }
}
