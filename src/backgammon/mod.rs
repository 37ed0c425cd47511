mod board;
pub use board::Board;

mod player;
pub use player::Color;

mod checker;
pub use checker::Checker;
pub use checker::CheckerId;

mod position;
pub use position::CELL_COUNT;
pub use position::Position;

mod game;
pub use game::Game;

mod events;
pub use events::GameEvent;

mod halfmove;
pub use halfmove::HalfMove;

mod full_move;
pub use full_move::Move;

mod dice;
pub use dice::BonusPair;
pub use dice::DicePair;

mod move_pool;
pub use move_pool::MovePool;

mod turn;
pub use turn::TurnController;

mod validator;
pub use validator::MoveValidator;
