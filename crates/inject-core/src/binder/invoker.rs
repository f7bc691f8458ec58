use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use log::error;

use super::{Packable, ParamList};
use crate::capability::Variant;
use crate::errors::ContractViolation;

type ErasedCall<R> = dyn Fn(&[Variant]) -> Result<R, ContractViolation> + Send + Sync;

/// Punto de entrada uniforme producido por el binder.
///
/// Captura el callable original por valor. Es `Clone` (los clones comparten
/// el callable) y se puede invocar concurrentemente si el callable es
/// reentrante; no añade locks propios.
pub struct PackedInvoker<R> {
    call: Arc<ErasedCall<R>>,
    arity: usize,
}

impl<R: 'static> PackedInvoker<R> {
    pub(crate) fn new<F, Args>(callable: F) -> Self
        where F: Packable<Args, Output = R>,
              Args: ParamList
    {
        let call = move |values: &[Variant]| -> Result<R, ContractViolation> {
            if values.len() != Args::LEN {
                return Err(ContractViolation::ArityMismatch { expected: Args::LEN,
                                                              found: values.len() });
            }
            let args = Args::extract(values, 0)?;
            Ok(callable.call_with(args))
        };
        Self { call: Arc::new(call),
               arity: Args::LEN }
    }
}

impl<R> PackedInvoker<R> {
    /// Número exacto de valores que exige la invocación.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invoca el callable con `values` y devuelve su resultado sin tocarlo.
    ///
    /// # Panics
    ///
    /// Si `values` no tiene exactamente `arity()` elementos o alguno no
    /// contiene el tipo declarado en su posición. Es una violación del
    /// contrato del llamador, no un error recuperable.
    pub fn invoke(&self, values: &[Variant]) -> R {
        match self.try_invoke(values) {
            Ok(result) => result,
            Err(violation) => {
                error!("packed invoker contract violation: {violation}");
                panic!("packed invoker contract violation: {violation}");
            }
        }
    }

    /// Igual que `invoke` pero entrega la violación de contrato como valor,
    /// para que el contenedor añada contexto antes de abortar. Si devuelve
    /// `Err`, el callable no se ha llamado.
    pub fn try_invoke(&self, values: &[Variant]) -> Result<R, ContractViolation> {
        (self.call)(values)
    }
}

impl<R> Clone for PackedInvoker<R> {
    fn clone(&self) -> Self {
        Self { call: Arc::clone(&self.call),
               arity: self.arity }
    }
}

impl<R> fmt::Debug for PackedInvoker<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedInvoker")
         .field("arity", &self.arity)
         .field("output", &type_name::<R>())
         .finish()
    }
}
