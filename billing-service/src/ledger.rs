use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use patient_registry::PatientId;
use rust_decimal::Decimal;

/// Copay paid by each patient per calendar year.
///
/// Entries are created by the first recorded charge, even a zero one,
/// and only ever grow.
#[derive(Debug, Default)]
pub struct CopayLedger {
    entries: DashMap<(PatientId, i32), Decimal>,
}

impl CopayLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copay accumulated so far; zero when nothing was charged
    pub fn accumulated(&self, patient: &PatientId, year: i32) -> Decimal {
        self.entries
            .get(&(patient.clone(), year))
            .map(|amount| *amount)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn add(&self, patient: &PatientId, year: i32, amount: Decimal) {
        self.charge(patient, year, |_| (Some(amount), ()));
    }

    /// Atomic read-modify-write of one (patient, year) entry.
    ///
    /// `f` receives the accumulated copay and returns the amount to add
    /// together with a value handed back to the caller. `None` leaves the
    /// ledger untouched. The entry stays locked while `f` runs, so `f` must
    /// not touch this ledger.
    pub fn charge<T>(
        &self,
        patient: &PatientId,
        year: i32,
        f: impl FnOnce(Decimal) -> (Option<Decimal>, T),
    ) -> T {
        match self.entries.entry((patient.clone(), year)) {
            Entry::Occupied(mut entry) => {
                let (amount, result) = f(*entry.get());
                if let Some(amount) = amount {
                    *entry.get_mut() += amount;
                }
                result
            }
            Entry::Vacant(entry) => {
                let (amount, result) = f(Decimal::ZERO);
                if let Some(amount) = amount {
                    entry.insert(amount);
                }
                result
            }
        }
    }

    /// Snapshot of every (patient, year, amount) entry, sorted by patient then year
    pub fn entries(&self) -> Vec<(PatientId, i32, Decimal)> {
        let mut snapshot: Vec<_> = self
            .entries
            .iter()
            .map(|entry| {
                let (patient, year) = entry.key();
                (patient.clone(), *year, *entry.value())
            })
            .collect();
        snapshot.sort_by(|a, b| (a.0.as_str(), a.1).cmp(&(b.0.as_str(), b.1)));
        snapshot
    }
}
