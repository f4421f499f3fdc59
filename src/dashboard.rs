use crate::model::{EnergyRecord, Unit};
use crate::remote::{LoadId, Remote};
use crate::requests::{ApiRequest, Origin, RequestDispatcher};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardMetrics {
    pub total: usize,
    pub ativas: usize,
    pub inativas: usize,
    /// Mean generated energy per record, `None` without records.
    pub media_energia: Option<f64>,
}

impl DashboardMetrics {
    pub fn derive(units: &[Unit], records: &[EnergyRecord]) -> Self {
        let ativas = units.iter().filter(|u| u.ativa).count();
        let media_energia = if records.is_empty() {
            None
        } else {
            let sum: f64 = records.iter().map(|r| r.total_kwh).sum();
            Some(sum / records.len() as f64)
        };
        Self {
            total: units.len(),
            ativas,
            inativas: units.len() - ativas,
            media_energia,
        }
    }

    /// Card titles and display values, in display order.
    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("Total unidades", self.total.to_string()),
            ("Unidades Ativas", self.ativas.to_string()),
            ("Unidades Inativas", self.inativas.to_string()),
            (
                "Média de energia",
                self.media_energia
                    .map(|m| format!("{m:.2} kWh"))
                    .unwrap_or_else(|| "-".into()),
            ),
        ]
    }
}

/// Two independently loaded sources feeding the summary cards.
#[derive(Debug, Default)]
pub struct Dashboard {
    units: Remote<Unit>,
    records: Remote<EnergyRecord>,
}

impl Dashboard {
    pub fn mount(&mut self, dispatcher: &dyn RequestDispatcher) {
        let units = self.units.start();
        let records = self.records.start();
        dispatcher.dispatch(Origin::Dashboard, ApiRequest::ListUnits(units));
        dispatcher.dispatch(Origin::Dashboard, ApiRequest::ListEnergyRecords(records));
    }

    pub fn apply_units(&mut self, load: LoadId, result: Result<Vec<Unit>, String>) {
        self.units.finish(load, result);
    }

    pub fn apply_records(&mut self, load: LoadId, result: Result<Vec<EnergyRecord>, String>) {
        self.records.finish(load, result);
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::derive(self.units.items(), self.records.items())
    }

    pub fn is_loading(&self) -> bool {
        self.units.is_loading() || self.records.is_loading()
    }

    /// One message per failed source.
    pub fn errors(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(e) = self.units.error() {
            out.push(format!("Unidades: {e}"));
        }
        if let Some(e) = self.records.error() {
            out.push(format!("Lançamentos: {e}"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::testing::RecordingDispatcher;

    fn unit(id: u64, ativa: bool) -> Unit {
        Unit {
            id,
            apelido: format!("Unidade {id}"),
            local: String::new(),
            marca: String::new(),
            modelo: String::new(),
            ativa,
        }
    }

    fn record(id: u64, total_kwh: f64) -> EnergyRecord {
        EnergyRecord {
            id,
            unidade_id: 1,
            data: "2024-01".into(),
            total_kwh,
        }
    }

    #[test]
    fn counts_split_by_active_flag() {
        let units = [unit(1, true), unit(2, false), unit(3, true)];
        let m = DashboardMetrics::derive(&units, &[]);
        assert_eq!((m.total, m.ativas, m.inativas), (3, 2, 1));
        assert_eq!(m.media_energia, None);
        assert_eq!(m.cards()[3].1, "-");
    }

    #[test]
    fn average_is_mean_over_all_records() {
        let records = [record(1, 100.0), record(2, 50.0), record(3, 0.0)];
        let m = DashboardMetrics::derive(&[], &records);
        assert_eq!(m.media_energia, Some(50.0));
        let cards = m.cards();
        assert_eq!(cards[0], ("Total unidades", "0".to_string()));
        assert_eq!(cards[3], ("Média de energia", "50.00 kWh".to_string()));
    }

    #[test]
    fn mount_fetches_both_sources_separately() {
        let dispatcher = RecordingDispatcher::default();
        let mut dashboard = Dashboard::default();
        dashboard.mount(&dispatcher);
        assert!(dashboard.is_loading());
        assert_eq!(
            dispatcher.take(),
            vec![
                (Origin::Dashboard, ApiRequest::ListUnits(1)),
                (Origin::Dashboard, ApiRequest::ListEnergyRecords(1)),
            ]
        );
    }

    #[test]
    fn one_failed_source_keeps_the_other_metrics() {
        let mut dashboard = Dashboard::default();
        dashboard.mount(&RecordingDispatcher::default());
        dashboard.apply_units(1, Ok(vec![unit(1, true), unit(2, false)]));
        dashboard.apply_records(1, Err("timed out".into()));
        let m = dashboard.metrics();
        assert_eq!(m.total, 2);
        assert_eq!(m.media_energia, None);
        assert_eq!(dashboard.errors(), vec!["Lançamentos: timed out".to_string()]);
    }

    #[test]
    fn refresh_ignores_answers_to_the_previous_load() {
        let dispatcher = RecordingDispatcher::default();
        let mut dashboard = Dashboard::default();
        dashboard.mount(&dispatcher);
        dashboard.mount(&dispatcher);
        dashboard.apply_units(2, Ok(vec![unit(1, true), unit(2, true)]));
        dashboard.apply_records(2, Ok(vec![record(1, 10.0)]));
        dashboard.apply_units(1, Ok(Vec::new()));
        dashboard.apply_records(1, Err("timed out".into()));
        let m = dashboard.metrics();
        assert_eq!(m.total, 2);
        assert_eq!(m.media_energia, Some(10.0));
        assert!(dashboard.errors().is_empty());
        assert!(!dashboard.is_loading());
    }
}
