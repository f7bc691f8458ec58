//! Macros para declarar miembros de la familia de objetos y sus interfaces.
//!
//! Exportadas en la raíz del crate:
//!   use inject_core::{implements, object_family};

/// Declara un tipo (o una interfaz `dyn Trait`) como miembro de la familia de
/// objetos inyectables.
///
/// Formas soportadas:
/// - `object_family!(MyService);` // CLASS_NAME = "MyService"
/// - `object_family!(dyn MyInterface);` // CLASS_NAME = "MyInterface"
/// - `object_family!(MyType<u8> => "MyType");` // nombre explícito
/// - `object_family!(dyn MyInterface => "IMyInterface");`
#[macro_export]
macro_rules! object_family {
    (dyn $iface:ident) => {
        $crate::object_family!(dyn $iface => stringify!($iface));
    };
    (dyn $iface:ident => $name:expr) => {
        impl $crate::capability::ObjectFamily for dyn $iface {
            const CLASS_NAME: &'static str = $name;
        }
    };
    ($ty:ident) => {
        $crate::object_family!($ty => stringify!($ty));
    };
    ($ty:ty => $name:expr) => {
        impl $crate::capability::ObjectFamily for $ty {
            const CLASS_NAME: &'static str = $name;
        }
    };
}

/// Declara que un servicio implementa una interfaz de la familia.
///
/// `implements!(ConsoleLog => dyn Log);`
#[macro_export]
macro_rules! implements {
    ($service:ty => $iface:ty) => {
        impl $crate::capability::Implements<$iface> for $service {
            fn upcast(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$iface> {
                self
            }
        }
    };
}
