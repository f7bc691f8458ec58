use serde::Serialize;

/// Descriptor de un parámetro inyectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamDescriptor {
    /// Posición en la firma (0-based).
    pub position: usize,
    /// Tipo Rust declarado, p. ej. `alloc::sync::Arc<app::Repo>`.
    pub type_name: &'static str,
    /// Nombre de clase reflejado del objeto apuntado.
    pub class_name: &'static str,
}

/// Firma de un callable: descriptores en orden de declaración. Inmutable una
/// vez construida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Signature {
    params: Vec<ParamDescriptor>,
}

impl Signature {
    pub(crate) fn new(params: Vec<ParamDescriptor>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
