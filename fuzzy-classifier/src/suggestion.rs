use crate::{
    breakdown::round_to,
    consts::GENERAL_TIP_THRESHOLD_KWH,
    inference::{Category, FuzzyResult},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Energy one appliance used over the evaluated period
pub struct ApplianceUsage {
    pub name: String,
    pub kwh_used: f64,
}

impl ApplianceUsage {
    pub fn new(name: impl Into<String>, kwh_used: f64) -> Self {
        Self {
            name: name.into(),
            kwh_used,
        }
    }
}

const BOROS_MESSAGES: [&str; 3] = [
    "⚠️ Penggunaan listrik Anda tergolong BOROS",
    "💡 Matikan peralatan elektronik yang tidak digunakan",
    "🌡️ Atur suhu AC pada 24-26°C untuk efisiensi maksimal",
];

const NORMAL_MESSAGES: [&str; 3] = [
    "✅ Penggunaan listrik Anda dalam batas NORMAL",
    "💚 Pertahankan kebiasaan baik ini",
    "📊 Pantau terus penggunaan untuk mencegah pemborosan",
];

const HEMAT_MESSAGES: [&str; 3] = [
    "🌟 Excellent! Penggunaan listrik Anda sangat HEMAT",
    "🏆 Anda adalah contoh pengguna listrik yang bijak",
    "♻️ Teruskan kebiasaan hemat energi ini",
];

const LED_TIP: &str = "💡 Tips: Ganti lampu dengan LED untuk penghematan 75%";

/// Builds the recommendations for a classification, most important first.
///
/// `appliances` is only read; the top consumer is selected without reordering it.
pub fn suggest(result: &FuzzyResult, total_kwh: f64, appliances: &[ApplianceUsage]) -> Vec<String> {
    let messages = match result.category {
        Category::Boros => &BOROS_MESSAGES,
        Category::Normal => &NORMAL_MESSAGES,
        Category::Hemat => &HEMAT_MESSAGES,
    };
    let mut suggestions: Vec<String> = messages.iter().map(|m| m.to_string()).collect();

    if result.category == Category::Boros {
        if let Some(top) = top_consumer(appliances) {
            suggestions.push(format!(
                "⚡ Alat paling boros: {} ({:.2} kWh)",
                top.name,
                // `{:.2}` alone rounds exact ties to even
                round_to(top.kwh_used, 2)
            ));
        }
    }

    if total_kwh > GENERAL_TIP_THRESHOLD_KWH {
        suggestions.push(LED_TIP.to_string());
    }

    suggestions
}

/// Appliance with the highest usage, the earliest one wins a tie
pub fn top_consumer(appliances: &[ApplianceUsage]) -> Option<&ApplianceUsage> {
    appliances.iter().reduce(|top, appliance| {
        if appliance.kwh_used > top.kwh_used {
            appliance
        } else {
            top
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::inference::classify;

    fn fridge_and_tv() -> Vec<ApplianceUsage> {
        vec![
            ApplianceUsage::new("Fridge", 5.0),
            ApplianceUsage::new("TV", 1.2),
        ]
    }

    #[test]
    fn test_boros_names_top_consumer() {
        let suggestions = suggest(&classify(20.0).unwrap(), 20.0, &fridge_and_tv());

        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0], "⚠️ Penggunaan listrik Anda tergolong BOROS");
        assert_eq!(suggestions[3], "⚡ Alat paling boros: Fridge (5.00 kWh)");
        assert_eq!(suggestions[4], LED_TIP);
    }

    #[test]
    fn test_boros_without_appliances() {
        let suggestions = suggest(&classify(16.0).unwrap(), 16.0, &[]);

        assert_eq!(suggestions.len(), 4);
        assert!(suggestions.iter().all(|s| !s.contains("Alat paling boros")));
        assert_eq!(suggestions.last().map(String::as_str), Some(LED_TIP));
    }

    #[test]
    fn test_normal_and_hemat_ignore_appliances() {
        let appliances = fridge_and_tv();

        let normal = suggest(&classify(10.0).unwrap(), 10.0, &appliances);
        assert_eq!(&normal[..3], &NORMAL_MESSAGES);
        assert_eq!(normal.len(), 4);

        let hemat = suggest(&classify(2.0).unwrap(), 2.0, &appliances);
        assert_eq!(hemat, HEMAT_MESSAGES.to_vec());
    }

    #[test]
    fn test_general_tip_needs_more_than_five_kwh() {
        let at_limit = suggest(&classify(5.0).unwrap(), 5.0, &[]);
        assert!(!at_limit.contains(&LED_TIP.to_string()));

        let above = suggest(&classify(5.01).unwrap(), 5.01, &[]);
        assert_eq!(above.last().map(String::as_str), Some(LED_TIP));
    }

    #[test]
    fn test_top_consumer_rounds_half_up() {
        let mut appliances = vec![ApplianceUsage::new("Heater", 2.625)];
        appliances.extend((0..5).map(|i| ApplianceUsage::new(format!("Pump {i}"), 2.5)));

        let suggestions = suggest(&classify(15.125).unwrap(), 15.125, &appliances);

        assert_eq!(suggestions[3], "⚡ Alat paling boros: Heater (2.63 kWh)");
    }

    #[test]
    fn test_tie_keeps_first_appliance() {
        let appliances = vec![
            ApplianceUsage::new("Heater", 3.5),
            ApplianceUsage::new("Kettle", 1.0),
            ApplianceUsage::new("Oven", 3.5),
        ];

        assert_eq!(top_consumer(&appliances).map(|a| a.name.as_str()), Some("Heater"));
        assert_eq!(top_consumer(&[]), None);
    }

    #[test]
    fn test_input_order_untouched() {
        let appliances = vec![
            ApplianceUsage::new("TV", 1.2),
            ApplianceUsage::new("AC", 12.0),
            ApplianceUsage::new("Fridge", 6.0),
        ];
        let before = appliances.clone();

        let suggestions = suggest(&classify(19.2).unwrap(), 19.2, &appliances);

        assert_eq!(appliances, before);
        assert!(suggestions.contains(&"⚡ Alat paling boros: AC (12.00 kWh)".to_string()));
    }

    #[test]
    fn test_never_empty() {
        for kwh in (0..=40).map(|v| v as f64 / 2.0) {
            assert!(!suggest(&classify(kwh).unwrap(), kwh, &[]).is_empty());
        }
    }
}
