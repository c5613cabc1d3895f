use gridsnake::game::SnakeGame;

fn main() {
    let mut game = SnakeGame::new();
    game.initialize();

    // The game loop takes care of exiting cleanly on CTRL+C
    game.play();
}
