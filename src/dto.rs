//! Response views. These never carry relational fields.

use serde::{Deserialize, Serialize};

use crate::models::{Ingrediente, Rango};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangoDto {
    pub id: i32,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredienteDto {
    pub id: i32,
    pub nome: String,
}

impl From<Rango> for RangoDto {
    fn from(rango: Rango) -> Self {
        RangoDto {
            id: rango.id,
            nome: rango.nome,
        }
    }
}

impl From<&Rango> for RangoDto {
    fn from(rango: &Rango) -> Self {
        RangoDto {
            id: rango.id,
            nome: rango.nome.clone(),
        }
    }
}

impl From<Ingrediente> for IngredienteDto {
    fn from(ingrediente: Ingrediente) -> Self {
        IngredienteDto {
            id: ingrediente.id,
            nome: ingrediente.nome,
        }
    }
}

impl From<&Ingrediente> for IngredienteDto {
    fn from(ingrediente: &Ingrediente) -> Self {
        IngredienteDto {
            id: ingrediente.id,
            nome: ingrediente.nome.clone(),
        }
    }
}

pub fn to_rango_dtos(rangos: Vec<Rango>) -> Vec<RangoDto> {
    rangos.into_iter().map(RangoDto::from).collect()
}

pub fn to_ingrediente_dtos(ingredientes: Vec<Ingrediente>) -> Vec<IngredienteDto> {
    ingredientes.into_iter().map(IngredienteDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rango(id: i32, nome: &str) -> Rango {
        Rango {
            id,
            nome: nome.to_string(),
        }
    }

    fn ingrediente(id: i32, nome: &str, rango_id: i32) -> Ingrediente {
        Ingrediente {
            id,
            nome: nome.to_string(),
            rango_id,
        }
    }

    #[test]
    fn rango_view_copies_id_and_nome() {
        let entity = rango(1, "Feijoada");
        let borrowed = RangoDto::from(&entity);
        let owned = RangoDto::from(entity);

        assert_eq!(borrowed, owned);
        assert_eq!(owned.id, 1);
        assert_eq!(owned.nome, "Feijoada");
    }

    #[test]
    fn ingrediente_view_drops_owner() {
        let view = IngredienteDto::from(ingrediente(10, "Feijão", 1));
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({"id": 10, "nome": "Feijão"})
        );
    }

    #[test]
    fn collections_keep_order_and_length() {
        let views = to_ingrediente_dtos(vec![
            ingrediente(11, "Arroz", 1),
            ingrediente(10, "Feijão", 1),
            ingrediente(12, "Arroz", 1),
        ]);
        let ids: Vec<i32> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![11, 10, 12]);

        assert!(to_rango_dtos(Vec::new()).is_empty());
        assert!(to_ingrediente_dtos(Vec::new()).is_empty());
    }
}
