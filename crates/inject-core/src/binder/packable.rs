use super::ParamList;
use crate::capability::Injectable;

/// Callable empaquetable con lista de parámetros `Args`.
///
/// Está implementado para cualquier `Fn(A1, .., An) -> R + Send + Sync +
/// 'static` cuyos parámetros sean todos `Injectable`, con `Args` la lista
/// encadenada `(A1, (.., (An, ())))`. `Args` se infiere en la llamada a
/// `ParameterBinder::pack`, así que funciona con closures (con tipos de
/// parámetro anotados) y con funciones.
#[diagnostic::on_unimplemented(message = "`{Self}` cannot be packed for injection",
                               label = "every parameter must be `Arc<T>` with `T: ObjectFamily` (at most 16 parameters)")]
pub trait Packable<Args: ParamList>: Send + Sync + 'static {
    /// Resultado del callable original.
    type Output;

    /// Llama al callable con los argumentos ya convertidos.
    fn call_with(&self, args: Args) -> Self::Output;
}

macro_rules! impl_packable {
    () => {
        impl<F, R> Packable<()> for F
            where F: Fn() -> R + Send + Sync + 'static
        {
            type Output = R;

            fn call_with(&self, _args: ()) -> R {
                self()
            }
        }
    };
    ($head:ident $(, $tail:ident)*) => {
        impl<F, R, $head, $($tail),*> Packable<$crate::param_list!($head $(, $tail)*)> for F
            where F: Fn($head, $($tail),*) -> R + Send + Sync + 'static,
                  $head: Injectable,
                  $($tail: Injectable,)*
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn call_with(&self, $crate::param_list!($head $(, $tail)*): $crate::param_list!($head $(, $tail)*)) -> R {
                self($head, $($tail),*)
            }
        }

        impl_packable!($($tail),*);
    };
}

impl_packable!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16);
