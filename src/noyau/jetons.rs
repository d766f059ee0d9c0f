// src/noyau/jetons.rs
//
// Tokenisation
// ------------
// Texte brut -> suite ordonnée de jetons typés, puis insertion des
// multiplications implicites (2pi, pi(2), 3(4), (1)(2), 5!pi ...).

use super::erreur::{Error, Result};
use super::fonctions::est_fonction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),

    // Constantes (pi, e) ET noms de fonctions, toujours en minuscules.
    // NOTE: c’est l’évaluation qui décide (constante, fonction, ou inconnu).
    Identifier(String),

    BinaryOperator(BinOp),
    UnaryMinus,

    LeftParen,
    RightParen,
    Comma,

    // postfixés
    Percent,
    Factorial,
}

impl Token {
    /// Un jeton qui termine une valeur : ce qui suit peut être une multiplication implicite.
    fn termine_valeur(&self) -> bool {
        matches!(
            self,
            Token::Number(_)
                | Token::RightParen
                | Token::Factorial
                | Token::Percent
                | Token::Identifier(_)
        )
    }

    /// Nom de fonction connu : suivi de '(' c’est un appel, pas un produit.
    fn est_appel(&self, next: &Token) -> bool {
        matches!((self, next), (Token::Identifier(name), Token::LeftParen) if est_fonction(name))
    }
}

/// Table fixe opérateurs / ponctuation (ASCII + glyphes × ÷).
fn jeton_ponctuation(c: char) -> Option<Token> {
    let t = match c {
        '+' => Token::BinaryOperator(BinOp::Add),
        '-' => Token::BinaryOperator(BinOp::Subtract),
        '*' | '×' => Token::BinaryOperator(BinOp::Multiply),
        '/' | '÷' => Token::BinaryOperator(BinOp::Divide),
        '^' => Token::BinaryOperator(BinOp::Power),
        '(' => Token::LeftParen,
        ')' => Token::RightParen,
        ',' => Token::Comma,
        '%' => Token::Percent,
        '!' => Token::Factorial,
        _ => return None,
    };
    Some(t)
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (12, 0.5, .5, 1e3, 2.5E-4)
/// - identifiants ASCII [a-zA-Z]+ (normalisés en minuscules)
/// - π (=> "pi") et √ (=> "sqrt")
/// - opérateurs + - * × / ÷ ^ , postfixés % !, parenthèses, virgule
/// - espaces et tabulations ignorés
pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    let bruts = scanner(s)?;
    Ok(inserer_multiplications(bruts))
}

fn scanner(s: &str) -> Result<Vec<Token>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == ' ' || c == '\t' {
            i += 1;
            continue;
        }

        // Nombre : chiffre, ou '.' suivi d’un chiffre
        let suivant_chiffre = chars.get(i + 1).is_some_and(|d| d.is_ascii_digit());
        if c.is_ascii_digit() || (c == '.' && suivant_chiffre) {
            let (valeur, fin) = lire_nombre(&chars, i)?;
            out.push(Token::Number(valeur));
            i = fin;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Token::Identifier(word.to_ascii_lowercase()));
            continue;
        }

        if c == 'π' {
            out.push(Token::Identifier("pi".to_string()));
            i += 1;
            continue;
        }
        if c == '√' {
            out.push(Token::Identifier("sqrt".to_string()));
            i += 1;
            continue;
        }

        match jeton_ponctuation(c) {
            Some(t) => {
                out.push(t);
                i += 1;
            }
            None => return Err(Error::UnexpectedCharacter(c)),
        }
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `start`; retourne (valeur, position de fin).
///
/// L’exposant (e/E, signe optionnel) n’est consommé que si au moins un chiffre suit :
/// sinon le `e` reste disponible pour un identifiant (`2e` => 2 * e).
fn lire_nombre(chars: &[char], start: usize) -> Result<(f64, usize)> {
    let chiffres = |mut i: usize| {
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = chiffres(start);

    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        i = chiffres(i + 1);
    }

    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            i = chiffres(j);
        }
    }

    let texte: String = chars[start..i].iter().collect();
    // Ne peut échouer que sur un texte mal découpé ; on le signale comme caractère fautif.
    let valeur = texte
        .parse::<f64>()
        .map_err(|_| Error::UnexpectedCharacter(chars[start]))?;
    Ok((valeur, i))
}

/// Insère un `*` synthétique entre une fin de valeur et un `(`, un identifiant,
/// ou (après un identifiant) un nombre. Seul `fonction(` reste un appel :
/// `sin30` devient `sin * 30`, rejeté à l’évaluation faute d’argument.
fn inserer_multiplications(bruts: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(bruts.len() * 2);
    let mut iter = bruts.into_iter().peekable();

    while let Some(tok) = iter.next() {
        let implicite = match iter.peek() {
            Some(next) if tok.termine_valeur() && !tok.est_appel(next) => match next {
                Token::LeftParen | Token::Identifier(_) => true,
                Token::Number(_) => matches!(tok, Token::Identifier(_)),
                _ => false,
            },
            _ => false,
        };

        out.push(tok);
        if implicite {
            out.push(Token::BinaryOperator(BinOp::Multiply));
        }
    }

    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Token::Number(v) => format!("{v}"),
            Token::Identifier(name) => name.clone(),

            Token::BinaryOperator(BinOp::Add) => "+".to_string(),
            Token::BinaryOperator(BinOp::Subtract) => "-".to_string(),
            Token::BinaryOperator(BinOp::Multiply) => "*".to_string(),
            Token::BinaryOperator(BinOp::Divide) => "/".to_string(),
            Token::BinaryOperator(BinOp::Power) => "^".to_string(),
            Token::UnaryMinus => "neg".to_string(),

            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
            Token::Comma => ",".to_string(),
            Token::Percent => "%".to_string(),
            Token::Factorial => "!".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
