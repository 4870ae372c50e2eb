use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// A player action after table rules have been applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ruling {
    Fold,
    Check,
    Call,
    Raise { amount: u32 },
    AllIn,
}

/// Apply the table's betting rules to a requested action.
///
/// Converts a [`crate::player::PlayerAction`] into a [`Ruling`]:
///
/// - `Check` is rejected while the seat's street contribution is below the
///   table bet; nothing else is validated here.
/// - `Raise` increments below the table minimum are floored to `min_raise`
///   rather than rejected.
/// - `Fold`, `Call` and `AllIn` pass through; stack clamping is handled by
///   the seat's own chip operations.
///
/// # Examples
///
/// ```
/// use felt_engine::rules::{apply_table_rules, Ruling};
/// use felt_engine::player::PlayerAction;
///
/// // Raise below the minimum is floored, not refused
/// let r = apply_table_rules(0, 20, 20, PlayerAction::Raise(5));
/// assert_eq!(r, Ok(Ruling::Raise { amount: 20 }));
///
/// // Check while behind the table bet is rejected
/// let r = apply_table_rules(0, 20, 20, PlayerAction::Check);
/// assert!(r.is_err());
/// ```
pub fn apply_table_rules(
    player_bet: u32,
    table_bet: u32,
    min_raise: u32,
    action: A,
) -> Result<Ruling, GameError> {
    match action {
        A::Fold => Ok(Ruling::Fold),
        A::Check => {
            if player_bet < table_bet {
                Err(GameError::CheckNotAllowed {
                    player_bet,
                    table_bet,
                })
            } else {
                Ok(Ruling::Check)
            }
        }
        A::Call => Ok(Ruling::Call),
        A::Raise(amount) => Ok(Ruling::Raise {
            amount: amount.max(min_raise),
        }),
        A::AllIn => Ok(Ruling::AllIn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_requires_matched_bet() {
        assert!(apply_table_rules(10, 20, 20, A::Check).is_err());
        assert_eq!(apply_table_rules(20, 20, 20, A::Check), Ok(Ruling::Check));
        // A seat sitting above the table bet may still check
        assert_eq!(apply_table_rules(30, 20, 20, A::Check), Ok(Ruling::Check));
    }

    #[test]
    fn raise_is_floored_to_minimum() {
        assert_eq!(
            apply_table_rules(0, 20, 20, A::Raise(5)),
            Ok(Ruling::Raise { amount: 20 })
        );
        assert_eq!(
            apply_table_rules(0, 20, 20, A::Raise(60)),
            Ok(Ruling::Raise { amount: 60 })
        );
    }

    #[test]
    fn passthrough_actions() {
        assert_eq!(apply_table_rules(0, 20, 20, A::Fold), Ok(Ruling::Fold));
        assert_eq!(apply_table_rules(0, 20, 20, A::Call), Ok(Ruling::Call));
        assert_eq!(apply_table_rules(0, 20, 20, A::AllIn), Ok(Ruling::AllIn));
    }
}
