//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di persistenza per una specifica collezione.

// ************************* NOTA SU SQLX ************************* //

/*
   Qui usiamo sqlx::query / sqlx::query_as::<_, T> (controllo a run-time) e non le macro
   query! / query_as!: le macro vogliono un database raggiungibile (o la cache .sqlx) già in
   fase di compilazione, mentre questo servizio deve compilare e girare anche con il backend
   in memoria. Il mapping riga -> entity lo fa #[derive(sqlx::FromRow)] sulle entity.
   Le colonne hanno gli stessi nomi dei campi Rust (snake_case); `year` va tra backtick.
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod car;
pub mod memory;
pub mod motorcycle;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, Update, VehicleRepository};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use car::CarRepository;
pub use memory::InMemoryRepository;
pub use motorcycle::MotorcycleRepository;
