//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche, réglages)
//! et offrir des opérations simples (C/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_sci::noyau::format::CHIFFRES_MAX;
use calculatrice_sci::noyau::{format_resultat, AngleMode, Demarche};

/// Chiffres significatifs affichés par défaut.
const CHIFFRES_DEFAUT: usize = 12;

/// Réglages de la calculatrice (affichage seulement : le noyau n’arrondit jamais).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub mode: AngleMode,
    pub chiffres: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            mode: AngleMode::Degrees,
            chiffres: CHIFFRES_DEFAUT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub valeur: Option<f64>, // dernier résultat (brut)
    pub erreur: String,      // message d’erreur (si parsing/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            valeur: None,
            erreur: String::new(),
            demarche: Demarche::default(),
            reglages: Reglages::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.valeur = None;
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.reglages = Reglages::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE la dernière valeur pour ne pas “effacer l’écran” sur une faute,
    /// mais la démarche n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.valeur = Some(valeur);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Texte affiché pour la dernière valeur (vide si aucune).
    pub fn affichage(&self) -> String {
        self.valeur
            .map(|v| format_resultat(v, self.reglages.chiffres))
            .unwrap_or_default()
    }

    pub fn set_mode(&mut self, mode: AngleMode) {
        self.reglages.mode = mode;
        self.focus_entree = true;
    }

    /// Garde-fou : 1..=17 chiffres significatifs.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.reglages.chiffres = chiffres.clamp(1, CHIFFRES_MAX);
        self.focus_entree = true;
    }
}
