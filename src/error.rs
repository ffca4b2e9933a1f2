use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsignadorError {
    #[error("Ingresa un ID de asesor")]
    AsesorVacio,

    #[error("La cantidad de leads debe ser al menos 1 (recibido: {0})")]
    CantidadInvalida(u32),

    #[error("No hay asignaciones cargadas")]
    LibroVacio,

    #[error("Razón social no encontrada en la base: {0}")]
    RazonSocialDesconocida(String),

    #[error("No hay una base cargada")]
    BaseNoCargada,

    #[error("Aún no se ha ejecutado ninguna asignación")]
    SinResultado,

    #[error("Falta la columna requerida '{0}'")]
    ColumnaFaltante(String),

    #[error("El archivo no contiene hojas")]
    HojaNoEncontrada,

    #[error("Error leyendo el Excel: {0}")]
    Lectura(String),

    #[error("Error escribiendo el Excel: {0}")]
    Escritura(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AsignadorError {
    /// `true` cuando el error se debe a datos de entrada del operador
    /// (se responde 400); el resto son fallos de estado o internos.
    pub fn es_error_de_entrada(&self) -> bool {
        matches!(
            self,
            AsignadorError::AsesorVacio
                | AsignadorError::CantidadInvalida(_)
                | AsignadorError::RazonSocialDesconocida(_)
                | AsignadorError::ColumnaFaltante(_)
                | AsignadorError::HojaNoEncontrada
                | AsignadorError::Lectura(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AsignadorError>;
