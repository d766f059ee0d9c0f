// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> postfixe (RPN)
//
// Règles:
// - Number : sortie directe.
// - Identifier : empilé (constante ou nom de fonction, tranché à ')' ou au prochain opérateur).
// - Moins unaire : '-' en tête, ou juste après + - * / ^ ( , dans la suite ORIGINALE.
// - ')' : dépile jusqu’à '(' puis sort la fonction éventuellement au sommet.
// - ',' : dépile jusqu’à '(' sans la retirer (elle borne les arguments suivants).
// - % et ! : postfixés, sortis tout de suite après avoir vidé les moins unaires
//   et constantes en attente au sommet ("-1!" => 1 neg !).

use log::trace;

use super::erreur::{Error, Result};
use super::fonctions::est_fonction;
use super::jetons::{BinOp, Token};

fn precedence(t: &Token) -> Option<u8> {
    match t {
        Token::UnaryMinus => Some(5),
        Token::BinaryOperator(BinOp::Power) => Some(4),
        Token::BinaryOperator(BinOp::Multiply | BinOp::Divide) => Some(3),
        Token::BinaryOperator(BinOp::Add | BinOp::Subtract) => Some(2),
        _ => None,
    }
}

fn is_right_associative(t: &Token) -> bool {
    matches!(
        t,
        Token::UnaryMinus | Token::BinaryOperator(BinOp::Power)
    )
}

/// Un '-' devient unaire s’il ouvre l’expression ou suit un opérateur, '(' ou ','.
fn ouvre_operande(prev: Option<&Token>) -> bool {
    match prev {
        None => true,
        Some(t) => matches!(
            t,
            Token::BinaryOperator(_) | Token::LeftParen | Token::Comma
        ),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Identifier("sin"), LeftParen, Identifier("pi"), Divide, Number(2), RightParen]
///   rpn:    [Identifier("pi"), Number(2), Divide, Identifier("sin")]
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for (i, tok) in tokens.iter().enumerate() {
        // Décidé sur la suite d’origine, avant toute manipulation de pile.
        let prev = if i == 0 { None } else { tokens.get(i - 1) };

        match tok {
            Token::Number(_) => out.push(tok.clone()),

            Token::Identifier(_) | Token::LeftParen => ops.push(tok.clone()),

            Token::BinaryOperator(BinOp::Subtract) if ouvre_operande(prev) => {
                trace!("'-' unaire en position {i}");
                pousser_operateur(Token::UnaryMinus, &mut ops, &mut out);
            }

            Token::BinaryOperator(_) | Token::UnaryMinus => {
                pousser_operateur(tok.clone(), &mut ops, &mut out);
            }

            Token::RightParen => {
                depiler_jusqu_a_parenthese(&mut ops, &mut out)
                    .ok_or(Error::MismatchedParens)?;
                ops.pop(); // '('

                // une fonction au sommet se lie à ses arguments déjà sortis
                if matches!(ops.last(), Some(Token::Identifier(_))) {
                    out.extend(ops.pop());
                }
            }

            Token::Comma => {
                depiler_jusqu_a_parenthese(&mut ops, &mut out)
                    .ok_or(Error::CommaOutsideFunction)?;
            }

            Token::Percent | Token::Factorial => {
                // un nom de fonction reste sur la pile : il attend encore son argument
                while match ops.last() {
                    Some(Token::UnaryMinus) => true,
                    Some(Token::Identifier(name)) => !est_fonction(name),
                    _ => false,
                } {
                    out.extend(ops.pop());
                }
                out.push(tok.clone());
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Token::LeftParen | Token::RightParen) {
            return Err(Error::MismatchedParens);
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile vers la sortie tant que le sommet domine `tok` (précédence + associativité),
/// en sortant aussi les identifiants nus (constantes), puis empile `tok`.
fn pousser_operateur(tok: Token, ops: &mut Vec<Token>, out: &mut Vec<Token>) {
    // `tok` est toujours un opérateur ici
    let p_tok = precedence(&tok).unwrap_or(0);

    while let Some(top) = ops.last() {
        let doit_pop = match top {
            Token::Identifier(_) => true,
            _ => match precedence(top) {
                Some(p_top) if is_right_associative(&tok) => p_top > p_tok,
                Some(p_top) => p_top >= p_tok,
                None => false,
            },
        };

        if !doit_pop {
            break;
        }
        out.extend(ops.pop());
    }

    ops.push(tok);
}

/// Dépile vers la sortie jusqu’à une '(' (laissée sur la pile).
/// `None` si la pile se vide sans en trouver.
fn depiler_jusqu_a_parenthese(ops: &mut Vec<Token>, out: &mut Vec<Token>) -> Option<()> {
    loop {
        match ops.last() {
            Some(Token::LeftParen) => return Some(()),
            Some(_) => out.extend(ops.pop()),
            None => return None,
        }
    }
}
