use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use super::{Implements, ObjectFamily};

/// Valor dinámico de la lista de invocación.
///
/// Guarda exactamente un `Arc<T>` con el tipo borrado, más el nombre del tipo
/// para los mensajes de diagnóstico. Clonar un `Variant` sólo incrementa
/// contadores de referencia.
#[derive(Clone)]
pub struct Variant {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Variant {
    /// Envuelve un objeto de la familia tal cual (por su tipo exacto).
    pub fn new<T: ObjectFamily + ?Sized>(object: Arc<T>) -> Self {
        Self { inner: Arc::new(object),
               type_name: type_name::<Arc<T>>() }
    }

    /// Envuelve un servicio como su interfaz `I`, que es el tipo que pedirá
    /// un parámetro `Arc<dyn I>`.
    pub fn of_interface<I, S>(service: Arc<S>) -> Self
        where I: ObjectFamily + ?Sized,
              S: Implements<I>
    {
        Self::new::<I>(service.upcast())
    }

    /// Nombre del tipo guardado (`Arc<...>`).
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `true` si el valor guardado es un `Arc<T>`.
    pub fn holds<T: ObjectFamily + ?Sized>(&self) -> bool {
        self.inner.is::<Arc<T>>()
    }

    pub(crate) fn downcast_arc<T: ObjectFamily + ?Sized>(&self) -> Option<Arc<T>> {
        self.inner.downcast_ref::<Arc<T>>().cloned()
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant").field("type_name", &self.type_name).finish()
    }
}
