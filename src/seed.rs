//! Seed data for the built-in catalog.
//!
//! Evolution series are generated from a seeded generator so every run of the
//! tool sees the same numbers.

use crate::investment::{
    EvolutionPoint, Holding, InvestmentRecord, PerformanceSnapshot, RiskLevel,
};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Year every seed evolution series covers.
pub const SEED_YEAR: i32 = 2024;

/// Builds a year of business-day cumulative returns starting on January 2nd.
///
/// Each weekday adds a uniform change in [-2, 2) to the running total; the
/// stored value is the total rounded to two decimals.
pub fn generate_evolution(year: i32, seed: u64) -> Vec<EvolutionPoint> {
    let Some(start) = NaiveDate::from_ymd_opt(year, 1, 2) else {
        tracing::warn!(year, "year out of range, no evolution generated");
        return Vec::new();
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut current = 0.0_f64;
    let mut data = Vec::new();

    for offset in 0..365 {
        let Some(date) = start.checked_add_days(Days::new(offset)) else {
            break;
        };
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        current += rng.gen_range(-2.0..2.0);
        data.push(EvolutionPoint {
            date,
            percentage: (current * 100.0).round() / 100.0,
        });
    }
    data
}

// FNV-1a, so each record gets its own stable series
fn seed_for(id: &str) -> u64 {
    id.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

struct Seed {
    id: &'static str,
    title: &'static str,
    risk_level: RiskLevel,
    description: &'static str,
    description_extended: &'static str,
    performance: [(&'static str, &'static str); 3],
    holdings: &'static [(&'static str, &'static str, f64)],
    horizon: &'static str,
}

impl Seed {
    fn build(self) -> InvestmentRecord {
        InvestmentRecord {
            id: self.id.to_string(),
            title: self.title.to_string(),
            risk_level: self.risk_level,
            description: self.description.to_string(),
            description_extended: self.description_extended.to_string(),
            performance: self
                .performance
                .iter()
                .map(|(period, percentage)| PerformanceSnapshot::new(period, percentage))
                .collect(),
            holdings: self
                .holdings
                .iter()
                .map(|(symbol, name, percentage)| Holding::new(symbol, name, *percentage))
                .collect(),
            evolution: generate_evolution(SEED_YEAR, seed_for(self.id)),
            horizon: self.horizon.to_string(),
        }
    }
}

/// Records in the order the catalog lists them.
pub fn seed_records() -> Vec<InvestmentRecord> {
    let seeds = [
        Seed {
            id: "ahorro",
            title: "Ahorro $",
            risk_level: RiskLevel::Conservative,
            description: "Movilizá tu dinero hasta que lo necesites.",
            description_extended: AHORRO_EXTENDED,
            performance: [("Semana", "-1,67%"), ("Mes", "-2,45%"), ("Trimestre", "-0,82%")],
            holdings: &[
                ("YPFD", "YPF S.A.", 25.5),
                ("GGAL", "Grupo Galicia", 18.2),
                ("PAMP", "Pampa Energía", 15.8),
                ("TGS", "Transportadora de Gas del Sur", 12.4),
                ("ALUA", "Aluar Aluminio", 10.1),
                ("MIRG", "Mirgor S.A.", 8.6),
                ("BMA", "Banco Macro", 9.4),
            ],
            horizon: "Corto plazo",
        },
        Seed {
            id: "ahorro-plus",
            title: "Ahorro Plus",
            risk_level: RiskLevel::Conservative,
            description: "Animate a más.",
            description_extended: AHORRO_PLUS_EXTENDED,
            performance: [("Semana", "0,10%"), ("Mes", "3,46%"), ("Trimestre", "8,19%")],
            holdings: &[
                ("GGAL", "Grupo Galicia", 22.1),
                ("YPFD", "YPF S.A.", 19.3),
                ("PAMP", "Pampa Energía", 16.7),
                ("TGS", "Transportadora de Gas del Sur", 14.2),
                ("ALUA", "Aluar Aluminio", 12.8),
                ("MIRG", "Mirgor S.A.", 9.5),
                ("BMA", "Banco Macro", 5.4),
            ],
            horizon: "Corto plazo",
        },
        Seed {
            id: "gestion-mix",
            title: "Gestión MIX VI",
            risk_level: RiskLevel::Moderate,
            description: "Equilibrio perfecto entre renta fija y variable.",
            description_extended: GESTION_MIX_EXTENDED,
            performance: [("Semana", "1,75%"), ("Mes", "4,82%"), ("Trimestre", "12,34%")],
            holdings: &[
                ("GGAL", "Grupo Galicia", 18.5),
                ("PAMP", "Pampa Energía", 16.2),
                ("YPFD", "YPF S.A.", 15.8),
                ("TGS", "Transportadora de Gas del Sur", 13.1),
                ("ALUA", "Aluar Aluminio", 11.7),
                ("MIRG", "Mirgor S.A.", 10.4),
                ("BMA", "Banco Macro", 8.9),
                ("TRAN", "Transener", 5.4),
            ],
            horizon: "Mediano plazo",
        },
        Seed {
            id: "cartera-renta",
            title: "Cartera Renta $",
            risk_level: RiskLevel::Moderate,
            description: "Inversión en pesos con foco en generación de rentas.",
            description_extended: CARTERA_RENTA_EXTENDED,
            performance: [("Semana", "2,15%"), ("Mes", "6,28%"), ("Trimestre", "15,67%")],
            holdings: &[
                ("GGAL", "Grupo Galicia", 20.3),
                ("PAMP", "Pampa Energía", 17.8),
                ("YPFD", "YPF S.A.", 16.4),
                ("TGS", "Transportadora de Gas del Sur", 14.2),
                ("ALUA", "Aluar Aluminio", 12.1),
                ("BMA", "Banco Macro", 10.7),
                ("MIRG", "Mirgor S.A.", 8.5),
            ],
            horizon: "Mediano plazo",
        },
        Seed {
            id: "bonos",
            title: "Bonos",
            risk_level: RiskLevel::Aggressive,
            description: "Inversión en bonos con alto potencial de crecimiento.",
            description_extended: BONOS_EXTENDED,
            performance: [("Semana", "3,42%"), ("Mes", "8,95%"), ("Trimestre", "22,18%")],
            holdings: &[
                ("AL30", "Bonos Argentina USD", 28.4),
                ("GD30", "Bonos Globales", 24.7),
                ("AE38", "Bonos Argentina EUR", 19.3),
                ("AL35", "Bonos Ley Argentina", 15.2),
                ("GD35", "Bonos Discount", 12.4),
            ],
            horizon: "Largo plazo",
        },
        Seed {
            id: "cartera-renta-fija",
            title: "Cartera Renta Fija",
            risk_level: RiskLevel::Conservative,
            description: "Cartera orientada a renta fija con bajo riesgo.",
            description_extended: CARTERA_RENTA_FIJA_EXTENDED,
            performance: [("Semana", "0,85%"), ("Mes", "2,94%"), ("Trimestre", "7,32%")],
            holdings: &[
                ("LECAP", "Letras Capitalización", 35.6),
                ("BONOS", "Bonos del Tesoro", 28.3),
                ("CEDEAR", "Certificados ADR", 18.7),
                ("FCI", "Fondos Comunes", 17.4),
            ],
            horizon: "Largo plazo",
        },
    ];

    seeds.into_iter().map(Seed::build).collect()
}

const AHORRO_EXTENDED: &str = "Ahorro $ es una solución de inversión conservadora diseñada específicamente para aquellos inversores que priorizan la liquidez inmediata y la preservación del capital. Esta cartera está estructurada para ofrecer flexibilidad total, permitiendo el acceso a los fondos en cualquier momento sin penalidades ni restricciones temporales.\n\nLa estrategia de inversión se enfoca en instrumentos de bajo riesgo y alta liquidez, incluyendo fondos de dinero, letras del tesoro a corto plazo y depósitos a plazo fijo de alta calidad crediticia. Esta composición garantiza que los fondos mantengan su valor mientras generan rendimientos conservadores pero consistentes.\n\nEl perfil conservador de esta cartera la convierte en la opción ideal para construir un fondo de emergencia, mantener capital de trabajo o como refugio temporal durante períodos de alta volatilidad en los mercados. Es especialmente recomendada para inversores que recién inician su camino en el mundo de las inversiones.\n\nSi bien los retornos pueden ser modestos comparados con alternativas más agresivas, la tranquilidad de tener acceso inmediato a los fondos y la protección del capital principal representan sus principales ventajas competitivas.";

const AHORRO_PLUS_EXTENDED: &str = "Ahorro Plus representa la evolución natural del producto Ahorro $, diseñado para inversores que buscan un equilibrio entre seguridad y rentabilidad mejorada. Esta cartera conservadora plus incorpora una mayor diversificación de instrumentos financieros, manteniendo los principios de seguridad pero con mayor potencial de crecimiento.\n\nLa estrategia incluye bonos corporativos de primera línea, certificados de depósito de bancos líderes y una pequeña exposición a fondos de renta fija de corto plazo. Esta composición busca capturar oportunidades de rendimiento adicional manteniendo un perfil de riesgo controlado y preservando la característica fundamental de alta liquidez.\n\nLos inversores pueden acceder a sus fondos con mínimas restricciones, aunque se recomienda un horizonte de inversión ligeramente superior para optimizar los resultados. Esta cartera es ideal para aquellos que han superado la etapa inicial de acumulación de capital y buscan hacer trabajar su dinero de manera más efectiva.\n\nLa gestión profesional y el monitoreo constante de las condiciones de mercado permiten ajustes tácticos que buscan maximizar el rendimiento ajustado por riesgo, sin comprometer significativamente la seguridad del capital invertido.";

const GESTION_MIX_EXTENDED: &str = "Gestión MIX VI representa una estrategia de inversión equilibrada que combina expertamente instrumentos de renta fija y renta variable para crear un portafolio diversificado de riesgo moderado. Esta cartera está diseñada para inversores que buscan participar del crecimiento potencial de los mercados de capitales mientras mantienen un colchón de estabilidad.\n\nLa asignación estratégica típicamente incluye entre 40-60% en renta variable (acciones locales y CEDEARs) y 40-60% en renta fija (bonos gubernamentales y corporativos), con ajustes tácticos basados en las condiciones de mercado prevalecientes. El enfoque de gestión activa permite capitalizar oportunidades de corto plazo mientras se mantiene la disciplina de largo plazo.\n\nEsta cartera es ideal para inversores con un horizonte temporal de mediano plazo (2-5 años) que pueden tolerar cierta volatilidad a cambio de un potencial de retorno superior. La diversificación entre clases de activos y sectores económicos busca reducir el riesgo específico mientras se captura el rendimiento de múltiples fuentes.\n\nLa gestión profesional incluye rebalanceo periódico para mantener las asignaciones objetivo y aprovechamiento de oportunidades de arbitraje entre diferentes segmentos del mercado, optimizando el perfil riesgo-retorno del portafolio.";

const CARTERA_RENTA_EXTENDED: &str = "Cartera Renta $ está especialmente diseñada para inversores que priorizan la generación de ingresos regulares en pesos argentinos, combinando instrumentos que distribuyen dividendos y cupones de forma periódica. Esta estrategia se enfoca en empresas argentinas con historial consistente de pago de dividendos y bonos que ofrecen cupones atractivos.\n\nLa cartera incluye empresas argentinas con historial consistente de pago de dividendos, bonos corporativos y gubernamentales que ofrecen cupones atractivos, y fondos de inversión especializados en generación de renta. La selección de activos busca proporcionar un flujo de ingresos predecible mientras mantiene potencial de apreciación del capital.\n\nEsta opción es ideal para inversores que buscan complementar sus ingresos regulares, como jubilados o personas que requieren flujos de caja periódicos, sin sacrificar completamente las oportunidades de crecimiento de capital. La gestión activa incluye el reinvertimiento estratégico de los ingresos generados.\n\nLa estrategia también considera aspectos fiscales para optimizar la eficiencia impositiva de los ingresos generados, y la optimización de la estructura temporal de los vencimientos para mantener un flujo constante de liquidez a lo largo del tiempo.";

const BONOS_EXTENDED: &str = "La cartera Bonos está estratégicamente posicionada para capturar las oportunidades de alto rendimiento en el mercado de bonos soberanos y corporativos argentinos, aprovechando los spreads atractivos y el potencial de convergencia hacia fundamentales económicos mejorados. Esta estrategia agresiva se enfoca en bonos que ofrecen yields elevados debido a las primas de riesgo país.\n\nLa cartera incluye una combinación de bonos argentinos denominados en dólares y pesos, tanto ley local como ley extranjera, con diferentes vencimientos para optimizar el perfil riesgo-retorno. Los bonos presentan potencial significativo de apreciación ante escenarios de normalización económica y mejora de la percepción de riesgo.\n\nLa gestión activa implica timing de mercado, trading de curva de rendimientos y análisis crediticio profundo para identificar oportunidades de valor relativo. Este enfoque requiere una alta tolerancia al riesgo y comprensión de los factores macroeconómicos que afectan los precios de los bonos.\n\nEs ideal para inversores sofisticados que buscan rendimientos superiores y pueden soportar alta volatilidad, especialmente en contextos de incertidumbre política y económica que caracterizan a los mercados emergentes. La diversificación temporal y de monedas ayuda a mitigar algunos riesgos específicos.";

const CARTERA_RENTA_FIJA_EXTENDED: &str = "Cartera Renta Fija constituye una solución de inversión conservadora y predecible, específicamente diseñada para inversores que priorizan la estabilidad de capital y la generación de ingresos consistentes a través de instrumentos de renta fija de alta calidad crediticia. Esta cartera se compone principalmente de instrumentos gubernamentales y corporativos de bajo riesgo.\n\nLa estrategia incluye letras del tesoro, bonos gubernamentales de corto y mediano plazo, certificados de depósito bancarios, y una selección cuidadosa de bonos corporativos de empresas con ratings crediticios sólidos. La gestión se enfoca en la optimización de la duración del portafolio para minimizar el riesgo de tasa de interés.\n\nLa diversificación temporal de vencimientos permite mantener liquidez periódica y reinversión oportuna según las condiciones de mercado. Esta cartera es especialmente adecuada para inversores conservadores, fondos de pensión, o como componente estabilizador dentro de una asignación de activos más amplia.\n\nEl enfoque de gestión pasiva y la selección rigurosa de emisores buscan preservar el capital mientras genera retornos reales positivos por encima de la inflación en el largo plazo, maximizando el ingreso por cupones de manera consistente.";
