use std::sync::Arc;

use super::Variant;

/// Familia de objetos polimórficos elegibles para inyección.
///
/// `CLASS_NAME` hace de metaobjeto estático: el nombre de clase reflejado que
/// usa el resolver cuando no hay un identificador de interfaz registrado.
/// Se implementa tanto para structs de servicio como para `dyn Interface`
/// (ver `object_family!`).
#[diagnostic::on_unimplemented(message = "`{Self}` is not part of the injectable object family",
                               label = "declare it with `object_family!`")]
pub trait ObjectFamily: Send + Sync + 'static {
    /// Nombre de clase reflejado (sin prefijo de namespace).
    const CLASS_NAME: &'static str;
}

/// Tipo de parámetro inyectable: un puntero compartido a un miembro de la
/// familia de objetos.
///
/// Sólo `Arc<T>` lo implementa. Pedir un identificador o empaquetar un
/// callable con cualquier otro tipo de parámetro no compila.
#[diagnostic::on_unimplemented(message = "`{Self}` cannot be injected",
                               label = "injectable parameters must be `Arc<T>` with `T: ObjectFamily`")]
pub trait Injectable: Sized + Clone + Send + Sync + 'static {
    /// Tipo de objeto apuntado; clave para el lookup de interfaces.
    type Object: ObjectFamily + ?Sized;

    /// Recupera el valor estático desde un `Variant`. `None` si el tipo
    /// guardado no coincide exactamente.
    fn from_variant(value: &Variant) -> Option<Self>;
}

impl<T: ObjectFamily + ?Sized> Injectable for Arc<T> {
    type Object = T;

    fn from_variant(value: &Variant) -> Option<Self> {
        value.downcast_arc::<T>()
    }
}

/// Predicado de capacidad en tiempo de compilación.
///
/// Sólo se puede instanciar con tipos inyectables, así que siempre devuelve
/// `true`; su utilidad es como aserción estática:
///
/// ```
/// use std::sync::Arc;
/// use inject_core::{is_injectable, object_family};
///
/// pub struct MyService;
/// object_family!(MyService);
///
/// const _: () = assert!(is_injectable::<Arc<MyService>>());
/// ```
pub const fn is_injectable<T: Injectable>() -> bool {
    true
}

/// `S` es una implementación válida de la interfaz `I`: ambos pertenecen a la
/// familia de objetos y `Arc<S>` se puede convertir en `Arc<I>`.
///
/// Se declara con `implements!(Service => dyn Interface)`.
pub trait Implements<I: ObjectFamily + ?Sized>: ObjectFamily + Sized {
    fn upcast(self: Arc<Self>) -> Arc<I>;
}
