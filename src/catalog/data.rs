use crate::models::{Category, FoodItem, Macros};

use Category::*;

/// Built-in catalog rows: id, name, category, kcal, proteins, carbs, fats per 100g.
///
/// Plan entries reference foods by these ids, so ids must never change.
/// Calories are stored as measured and are not reconciled with 4/4/9.
const FOOD_TABLE: &[(&str, &str, Category, f64, f64, f64, f64)] = &[
    // Carbs
    ("pasta", "Pasta (secca)", Carbs, 350.0, 12.0, 70.0, 1.5),
    ("pasta_integrale", "Pasta integrale", Carbs, 340.0, 13.0, 67.0, 2.5),
    ("riso_bianco", "Riso bianco", Carbs, 350.0, 7.0, 77.0, 0.5),
    ("riso_integrale", "Riso integrale", Carbs, 360.0, 7.5, 76.0, 3.0),
    ("riso_basmati", "Riso basmati", Carbs, 350.0, 8.0, 77.0, 1.0),
    ("riso_venere", "Riso venere", Carbs, 370.0, 9.0, 75.0, 2.5),
    ("quinoa", "Quinoa", Carbs, 370.0, 14.0, 64.0, 6.0),
    ("farro", "Farro", Carbs, 335.0, 15.0, 67.0, 2.5),
    ("orzo", "Orzo", Carbs, 350.0, 10.0, 73.0, 1.5),
    ("couscous", "Couscous", Carbs, 370.0, 13.0, 72.0, 1.5),
    ("pane_bianco", "Pane bianco", Carbs, 265.0, 9.0, 50.0, 3.0),
    ("pane_integrale", "Pane integrale", Carbs, 247.0, 11.0, 45.0, 4.0),
    ("patate", "Patate", Carbs, 77.0, 2.0, 17.0, 0.1),
    ("patate_dolci", "Patate dolci", Carbs, 86.0, 1.6, 20.0, 0.1),
    ("avena", "Avena", Carbs, 389.0, 17.0, 66.0, 7.0),
    // Proteins
    ("pollo_petto", "Petto di pollo", Proteins, 165.0, 31.0, 0.0, 3.6),
    ("pollo_coscia", "Coscia di pollo", Proteins, 209.0, 26.0, 0.0, 11.0),
    ("tacchino_petto", "Petto di tacchino", Proteins, 135.0, 30.0, 0.0, 1.0),
    ("manzo_magro", "Manzo magro", Proteins, 250.0, 26.0, 0.0, 15.0),
    ("vitello", "Vitello", Proteins, 172.0, 31.0, 0.0, 5.0),
    ("maiale_lonza", "Lonza di maiale", Proteins, 143.0, 27.0, 0.0, 3.5),
    ("salmone", "Salmone", Proteins, 208.0, 20.0, 0.0, 13.0),
    ("tonno", "Tonno (fresco)", Proteins, 144.0, 23.0, 0.0, 5.0),
    ("tonno_scatola", "Tonno in scatola", Proteins, 116.0, 26.0, 0.0, 1.0),
    ("merluzzo", "Merluzzo", Proteins, 82.0, 18.0, 0.0, 0.7),
    ("orata", "Orata", Proteins, 121.0, 20.0, 0.0, 4.0),
    ("branzino", "Branzino", Proteins, 135.0, 23.0, 0.0, 4.5),
    ("gamberi", "Gamberi", Proteins, 99.0, 24.0, 0.0, 0.3),
    ("uova", "Uova intere", Proteins, 155.0, 13.0, 1.1, 11.0),
    ("albumi", "Albumi", Proteins, 52.0, 11.0, 0.7, 0.2),
    ("bresaola", "Bresaola", Proteins, 151.0, 32.0, 0.0, 2.6),
    ("prosciutto_crudo", "Prosciutto crudo", Proteins, 145.0, 26.0, 0.0, 4.5),
    ("tofu", "Tofu", Proteins, 76.0, 8.0, 1.9, 4.8),
    ("seitan", "Seitan", Proteins, 370.0, 75.0, 14.0, 2.0),
    // Dairy
    ("latte_scremato", "Latte scremato", Dairy, 34.0, 3.4, 5.0, 0.1),
    ("latte_intero", "Latte intero", Dairy, 64.0, 3.2, 5.0, 3.6),
    ("yogurt_greco", "Yogurt greco 0%", Dairy, 59.0, 10.0, 3.6, 0.4),
    ("yogurt_intero", "Yogurt intero", Dairy, 61.0, 3.5, 4.7, 3.3),
    ("ricotta", "Ricotta vaccina", Dairy, 174.0, 11.0, 3.0, 13.0),
    ("fiocchi_latte", "Fiocchi di latte", Dairy, 98.0, 11.0, 3.4, 4.3),
    ("mozzarella", "Mozzarella", Dairy, 280.0, 19.0, 2.2, 22.0),
    ("parmigiano", "Parmigiano", Dairy, 392.0, 33.0, 0.0, 28.0),
    ("philadelphia", "Philadelphia light", Dairy, 160.0, 8.0, 5.0, 12.0),
    // Fats
    ("olio_oliva", "Olio d'oliva", Fats, 884.0, 0.0, 0.0, 100.0),
    ("avocado", "Avocado", Fats, 160.0, 2.0, 9.0, 15.0),
    ("mandorle", "Mandorle", Fats, 579.0, 21.0, 22.0, 50.0),
    ("noci", "Noci", Fats, 654.0, 15.0, 14.0, 65.0),
    ("nocciole", "Nocciole", Fats, 628.0, 15.0, 17.0, 61.0),
    ("burro_arachidi", "Burro di arachidi", Fats, 588.0, 25.0, 20.0, 50.0),
    ("burro_mandorle", "Burro di mandorle", Fats, 614.0, 21.0, 21.0, 56.0),
    // Vegetables
    ("broccoli", "Broccoli", Vegetables, 34.0, 2.8, 7.0, 0.4),
    ("spinaci", "Spinaci", Vegetables, 23.0, 2.9, 3.6, 0.4),
    ("zucchine", "Zucchine", Vegetables, 17.0, 1.2, 3.1, 0.3),
    ("pomodori", "Pomodori", Vegetables, 18.0, 0.9, 3.9, 0.2),
    ("peperoni", "Peperoni", Vegetables, 31.0, 1.0, 6.0, 0.3),
    ("carote", "Carote", Vegetables, 41.0, 0.9, 10.0, 0.2),
    ("fagiolini", "Fagiolini", Vegetables, 31.0, 1.8, 7.0, 0.1),
    ("insalata", "Insalata (lattuga)", Vegetables, 15.0, 1.4, 2.9, 0.2),
    ("rucola", "Rucola", Vegetables, 25.0, 2.6, 3.7, 0.7),
    ("asparagi", "Asparagi", Vegetables, 20.0, 2.2, 3.9, 0.1),
    // Fruits
    ("mela", "Mela", Fruits, 52.0, 0.3, 14.0, 0.2),
    ("banana", "Banana", Fruits, 89.0, 1.1, 23.0, 0.3),
    ("arancia", "Arancia", Fruits, 47.0, 0.9, 12.0, 0.1),
    ("kiwi", "Kiwi", Fruits, 61.0, 1.1, 15.0, 0.5),
    ("fragole", "Fragole", Fruits, 32.0, 0.7, 8.0, 0.3),
    ("mirtilli", "Mirtilli", Fruits, 57.0, 0.7, 14.0, 0.3),
    ("pera", "Pera", Fruits, 57.0, 0.4, 15.0, 0.1),
    ("pesca", "Pesca", Fruits, 39.0, 0.9, 10.0, 0.3),
    ("ananas", "Ananas", Fruits, 50.0, 0.5, 13.0, 0.1),
    // Supplements
    ("whey_isolate", "Whey Isolate", Supplements, 370.0, 90.0, 2.0, 1.0),
    ("whey_concentrate", "Whey Concentrate", Supplements, 400.0, 80.0, 8.0, 6.0),
    ("caseina", "Caseina Micellare", Supplements, 360.0, 80.0, 6.0, 2.0),
    ("proteine_vegane", "Proteine Vegane", Supplements, 380.0, 75.0, 10.0, 6.0),
    ("proteine_soia", "Proteine di Soia", Supplements, 370.0, 80.0, 7.0, 5.0),
    ("proteine_manzo", "Proteine di Manzo", Supplements, 360.0, 85.0, 2.0, 3.0),
    ("bcaa", "BCAA in polvere", Supplements, 0.0, 100.0, 0.0, 0.0),
    ("eaa", "EAA (Aminoacidi Essenziali)", Supplements, 0.0, 100.0, 0.0, 0.0),
    ("creatina", "Creatina Monoidrato", Supplements, 0.0, 0.0, 0.0, 0.0),
    ("maltodestrine", "Maltodestrine", Supplements, 380.0, 0.0, 95.0, 0.0),
    ("vitargo", "Vitargo", Supplements, 385.0, 0.0, 96.0, 0.0),
    ("destrosio", "Destrosio", Supplements, 380.0, 0.0, 95.0, 0.0),
    ("ciclodestrine", "Ciclodestrine", Supplements, 370.0, 0.0, 92.0, 0.0),
    ("barretta_proteica", "Barretta Proteica", Supplements, 350.0, 20.0, 35.0, 10.0),
    ("barretta_energetica", "Barretta Energetica", Supplements, 380.0, 7.0, 68.0, 7.0),
    ("pancake_proteici", "Pancake Proteici (mix)", Supplements, 360.0, 40.0, 30.0, 6.0),
    ("yogurt_proteico", "Yogurt Proteico", Supplements, 90.0, 10.0, 6.0, 2.0),
    ("pudding_proteico", "Pudding Proteico", Supplements, 110.0, 12.0, 8.0, 2.5),
    ("gelato_proteico", "Gelato Proteico", Supplements, 140.0, 8.0, 18.0, 4.0),
    ("cioccolato_proteico", "Cioccolato Proteico", Supplements, 450.0, 15.0, 50.0, 20.0),
    ("burro_arachidi_proteico", "Burro Arachidi Proteico", Supplements, 520.0, 30.0, 18.0, 40.0),
    ("wafer_proteici", "Wafer Proteici", Supplements, 380.0, 25.0, 42.0, 12.0),
    ("cookie_proteici", "Cookie Proteici", Supplements, 400.0, 20.0, 45.0, 14.0),
    ("chips_proteiche", "Chips Proteiche", Supplements, 360.0, 35.0, 30.0, 10.0),
    ("drink_proteico", "Drink Proteico Pronto", Supplements, 80.0, 15.0, 2.0, 1.5),
    ("gel_energetico", "Gel Energetico", Supplements, 250.0, 0.0, 60.0, 0.0),
    ("omega3", "Omega 3 (softgel)", Supplements, 10.0, 0.0, 0.0, 1.0),
    ("mct_oil", "Olio MCT", Supplements, 840.0, 0.0, 0.0, 100.0),
    ("collagene", "Collagene in polvere", Supplements, 340.0, 85.0, 0.0, 0.0),
    ("gainers", "Mass Gainer", Supplements, 380.0, 15.0, 75.0, 3.0),
];

/// Number of rows in the built-in table.
pub const BUILTIN_FOOD_COUNT: usize = FOOD_TABLE.len();

/// Materialize the built-in table in declaration order.
pub fn builtin_foods() -> Vec<FoodItem> {
    FOOD_TABLE
        .iter()
        .map(|&(id, name, category, calories, proteins, carbs, fats)| {
            FoodItem::new(id, name, category, Macros::new(calories, proteins, carbs, fats))
        })
        .collect()
}
