//! Integration tests for the move validation core
//!
//! Plays whole positions through the public API and checks the properties
//! every caller relies on: rejected moves change nothing, the turn flips
//! only on success, and the king cache always agrees with the board.

use chess_rules::{
    apply_move, apply_notation, is_legal_move, GameState, Layout, Move, MoveError, MoveRejected,
    Piece, PieceKind, PromotionPiece, RulesConfig, Square, Color,
};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

fn position(pieces: &[(&str, PieceKind, Color)], side_to_move: Color) -> GameState {
    let placement: Vec<(Square, Piece)> = pieces
        .iter()
        .map(|&(name, kind, color)| (sq(name), Piece::new(kind, color)))
        .collect();
    GameState::from_placement(&placement, side_to_move, RulesConfig::default()).unwrap()
}

/// Exactly one king per side, standing where the cache says
fn assert_king_cache_consistent(state: &GameState) {
    for color in [Color::White, Color::Black] {
        let kings: Vec<Square> = state.board().find_kings(color).collect();
        assert_eq!(kings, vec![state.king_square(color)], "{color} king cache");
    }
}

#[test]
fn test_scenario_opening_pawn_push() {
    //! e2e4 from the opening position moves the pawn, marks it as moved and
    //! hands the turn to Black.
    let mut state = GameState::new();

    apply_notation(&mut state, "e2e4", &mut PromotionPiece::Queen).unwrap();

    let pawn = state.board().get(sq("e4")).expect("pawn on e4");
    assert_eq!((pawn.kind, pawn.color), (PieceKind::Pawn, Color::White));
    assert!(pawn.has_moved);
    assert!(state.board().is_empty(sq("e2")));
    assert!(!state.white_to_move());
}

#[test]
fn test_scenario_blocked_rook() {
    let mut state = GameState::new();
    let before = state.clone();

    let err = apply_notation(&mut state, "a1a3", &mut PromotionPiece::Queen).unwrap_err();

    assert_eq!(
        err,
        MoveError::Rejected(MoveRejected::GeometryIllegal {
            kind: PieceKind::Rook,
            mv: mv("a1a3")
        })
    );
    assert_eq!(state, before);
}

#[test]
fn test_scenario_self_check_on_open_file() {
    //! White King d1 faces a Black Rook on d8 down an open file. The black
    //! king sits on h8, out of the way.
    let state = position(
        &[
            ("d1", PieceKind::King, Color::White),
            ("g1", PieceKind::Knight, Color::White),
            ("a4", PieceKind::Rook, Color::White),
            ("d8", PieceKind::Rook, Color::Black),
            ("h8", PieceKind::King, Color::Black),
        ],
        Color::White,
    );

    for text in ["g1f3", "g1e2", "a4a5", "d1d2"] {
        let mut attempt = state.clone();
        let err = apply_move(&mut attempt, mv(text), &mut PromotionPiece::Queen).unwrap_err();
        assert!(matches!(err, MoveRejected::SelfCheck { .. }), "{text} gave {err}");
        assert_eq!(attempt, state);
    }

    for text in ["d1c1", "d1e2", "a4d4"] {
        assert!(is_legal_move(&state, mv(text)), "{text} should resolve the check");
    }
}

#[test]
fn test_scenario_promotion_to_queen() {
    let mut state = position(
        &[
            ("a1", PieceKind::King, Color::White),
            ("e7", PieceKind::Pawn, Color::White),
            ("h6", PieceKind::King, Color::Black),
        ],
        Color::White,
    );

    let mut asked = 0;
    let mut chooser = |color: Color, square: Square| {
        asked += 1;
        assert_eq!((color, square), (Color::White, sq("e8")));
        PromotionPiece::Queen
    };
    apply_move(&mut state, mv("e7e8"), &mut chooser).unwrap();

    assert_eq!(asked, 1);
    let queen = state.board().get(sq("e8")).unwrap();
    assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::White));
    assert!(state.board().is_empty(sq("e7")));
}

#[test]
fn test_scenario_capture_opposite_color_only() {
    let mut state = position(
        &[
            ("a1", PieceKind::Rook, Color::White),
            ("a3", PieceKind::Knight, Color::White),
            ("c1", PieceKind::Bishop, Color::Black),
            ("e1", PieceKind::King, Color::White),
            ("h8", PieceKind::King, Color::Black),
        ],
        Color::White,
    );

    assert_eq!(
        apply_move(&mut state, mv("a1a3"), &mut PromotionPiece::Queen),
        Err(MoveRejected::DestinationOccupiedBySameColor {
            square: sq("a3"),
            color: Color::White
        })
    );

    apply_move(&mut state, mv("a1c1"), &mut PromotionPiece::Queen).unwrap();
    assert_eq!(
        state.board().get(sq("c1")).map(|piece| (piece.kind, piece.color)),
        Some((PieceKind::Rook, Color::White))
    );
    assert_eq!(state.board().pieces().count(), 4, "bishop was captured");
}

#[test]
fn test_game_keeps_invariants() {
    //! A short game with king walks, checks, blocks and captures. Two king
    //! captures are refused because the captured piece is defended.
    let mut state = GameState::new();
    let script: &[(&str, bool)] = &[
        ("e2e4", true),
        ("e7e5", true),
        ("d1e2", true),
        ("d8e7", true),
        ("e2e3", true),
        ("e7e6", true),
        ("b1c3", true),
        ("g8f6", true),
        ("f1c4", true),
        ("d7d5", true),
        ("c4d5", true),
        ("e6d5", false),
        ("f6d5", true),
        ("c3d5", true),
        ("e6d5", false),
    ];

    for &(text, accepted) in script {
        let before = state.clone();
        let result = apply_notation(&mut state, text, &mut PromotionPiece::Queen);

        if accepted {
            assert!(result.is_ok(), "{text} was rejected: {result:?}");
            assert_ne!(state.white_to_move(), before.white_to_move(), "{text} must pass the turn");
        } else {
            assert!(
                matches!(result, Err(MoveError::Rejected(MoveRejected::SelfCheck { .. }))),
                "{text} gave {result:?}"
            );
            assert_eq!(state, before, "{text} must not change anything");
        }
        assert_king_cache_consistent(&state);
    }

    assert_eq!(state.king_square(Color::White), sq("e3"));
    assert_eq!(state.king_square(Color::Black), sq("e6"));
}

#[test]
fn test_kings_never_meet() {
    //! Reduced layout: the white king walks up to the black king while the
    //! rook shuffles. The step next to the black king is refused, so neither
    //! king can ever be captured and the cache stays in step with the board.
    let mut state = GameState::with_config(Layout::Reduced, RulesConfig::default());
    let walk = [
        "d1e1", "a8a7", "e1d2", "a7a8", "d2d3", "a8a7", "d3d4", "a7a8", "d4d5", "a8a7", "d5e6",
        "a7a8",
    ];

    for text in walk {
        apply_notation(&mut state, text, &mut PromotionPiece::Queen)
            .unwrap_or_else(|err| panic!("{text} was rejected: {err}"));
        assert_king_cache_consistent(&state);
    }

    let before = state.clone();
    for text in ["e6d7", "e6e7"] {
        let result = apply_notation(&mut state, text, &mut PromotionPiece::Queen);
        assert!(
            matches!(result, Err(MoveError::Rejected(MoveRejected::SelfCheck { .. }))),
            "{text} gave {result:?}"
        );
        assert_eq!(state, before);
    }
    assert_king_cache_consistent(&state);
    assert_eq!(state.king_square(Color::White), sq("e6"));
}

#[test]
fn test_every_rejection_leaves_state_untouched() {
    let state = GameState::new();
    let mut legal = 0;

    for from in Square::all() {
        for to in Square::all() {
            let mut attempt = state.clone();
            match apply_move(&mut attempt, Move::new(from, to), &mut PromotionPiece::Queen) {
                Ok(()) => {
                    legal += 1;
                    assert!(!attempt.white_to_move());
                    assert_king_cache_consistent(&attempt);
                }
                Err(_) => assert_eq!(attempt, state, "{from}{to}"),
            }
        }
    }

    assert_eq!(legal, 20, "16 pawn moves and 4 knight moves");
}

#[test]
fn test_reduced_layout() {
    let state = GameState::with_config(Layout::Reduced, RulesConfig::default());

    assert_eq!(state.board().pieces().count(), 5);
    assert_eq!(state.king_square(Color::White), sq("d1"));
    assert_eq!(state.king_square(Color::Black), sq("d8"));
    assert!(state.white_to_move());
}

#[test]
fn test_opening_layout_and_rendering() {
    let state = GameState::new();
    let rendered = state.board().to_string();
    let rows: Vec<&str> = rendered.lines().collect();

    assert_eq!(rows[0], "8  r n b k q b n r");
    assert_eq!(rows[6], "2  P P P P P P P P");
    assert_eq!(rows[7], "1  R N B K Q B N R");
    assert_eq!(rows[8], "   a b c d e f g h");
}

#[test]
fn test_setup_requires_one_king_per_side() {
    let lone_white = [(sq("d1"), Piece::new(PieceKind::King, Color::White))];
    assert!(GameState::from_placement(&lone_white, Color::White, RulesConfig::default()).is_err());

    let two_kings = [
        (sq("d1"), Piece::new(PieceKind::King, Color::White)),
        (sq("e1"), Piece::new(PieceKind::King, Color::White)),
        (sq("d8"), Piece::new(PieceKind::King, Color::Black)),
    ];
    assert!(GameState::from_placement(&two_kings, Color::White, RulesConfig::default()).is_err());
}
