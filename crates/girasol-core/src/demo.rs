//! Built-in demo corpus and canned questions

pub const DEFAULT_DOCUMENTS: &str = "El perro ladra fuerte en el parque.
El gato maúlla suavemente durante la noche.
El perro y el gato juegan juntos en el jardín.
Los niños corren y se divierten en el parque.
La música suena muy alta en la fiesta.
Los pájaros cantan hermosas melodías al amanecer.";

/// The first entry doubles as the default question.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "¿Dónde juegan el perro y el gato?",
    "¿Qué hacen los niños en el parque?",
    "¿Cuándo cantan los pájaros?",
    "¿Dónde suena la música alta?",
    "¿Qué animal maúlla durante la noche?",
];

pub fn default_documents() -> Vec<String> {
    crate::pipeline::split_documents(DEFAULT_DOCUMENTS)
}
