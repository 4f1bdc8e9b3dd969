//! Cabinet controls and DIP switches.
//!
//! Buttons are plain level latches: a press or release takes effect on the next `IN`. The two
//! input ports are composed from the latches at the moment they are read.
//!
//! Port 1: bit 0 = coin (active low), 1 = P2 start, 2 = P1 start, 3 = always 1,
//! 4 = P1 shot, 5 = P1 left, 6 = P1 right.
//!
//! Port 2: bits 0-1 = ships, 2 = tilt, 3 = extra life at 1000, 4 = P2 shot, 5 = P2 left,
//! 6 = P2 right, 7 = coin info off in demo.

use crate::{
    config::{DemoCoinInfoSwitch, ExtraLifeSwitch, ShipSwitch},
    ports::{INP1, INP2, Peripheral},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Credit,
    Tilt,
    Start(Player),
    Shoot(Player),
    Left(Player),
    Right(Player),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PlayerControls {
    start: bool,
    shoot: bool,
    left: bool,
    right: bool,
}

pub struct InputLatches {
    credit: bool,
    tilt: bool,
    one: PlayerControls,
    two: PlayerControls,
    pub ships: ShipSwitch,
    pub extra_life: ExtraLifeSwitch,
    pub demo_coin_info: DemoCoinInfoSwitch,
}

impl InputLatches {
    pub fn new(
        ships: ShipSwitch,
        extra_life: ExtraLifeSwitch,
        demo_coin_info: DemoCoinInfoSwitch,
    ) -> Self {
        Self {
            credit: false,
            tilt: false,
            one: PlayerControls::default(),
            two: PlayerControls::default(),
            ships,
            extra_life,
            demo_coin_info,
        }
    }

    pub fn press(&mut self, button: Button) {
        *self.latch(button) = true;
    }

    pub fn release(&mut self, button: Button) {
        *self.latch(button) = false;
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Credit => self.credit,
            Button::Tilt => self.tilt,
            Button::Start(player) => self.player(player).start,
            Button::Shoot(player) => self.player(player).shoot,
            Button::Left(player) => self.player(player).left,
            Button::Right(player) => self.player(player).right,
        }
    }

    /// Input port 1.
    pub fn port1(&self) -> u8 {
        (!self.credit) as u8
            | (self.two.start as u8) << 1
            | (self.one.start as u8) << 2
            | 1 << 3
            | (self.one.shoot as u8) << 4
            | (self.one.left as u8) << 5
            | (self.one.right as u8) << 6
    }

    /// Input port 2.
    pub fn port2(&self) -> u8 {
        self.ships.code()
            | (self.tilt as u8) << 2
            | self.extra_life.code() << 3
            | (self.two.shoot as u8) << 4
            | (self.two.left as u8) << 5
            | (self.two.right as u8) << 6
            | self.demo_coin_info.code() << 7
    }

    fn player(&self, player: Player) -> &PlayerControls {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }

    fn player_mut(&mut self, player: Player) -> &mut PlayerControls {
        match player {
            Player::One => &mut self.one,
            Player::Two => &mut self.two,
        }
    }

    fn latch(&mut self, button: Button) -> &mut bool {
        match button {
            Button::Credit => &mut self.credit,
            Button::Tilt => &mut self.tilt,
            Button::Start(player) => &mut self.player_mut(player).start,
            Button::Shoot(player) => &mut self.player_mut(player).shoot,
            Button::Left(player) => &mut self.player_mut(player).left,
            Button::Right(player) => &mut self.player_mut(player).right,
        }
    }
}

impl Peripheral for InputLatches {
    fn on_read(&mut self, port: u8) -> Option<u8> {
        match port {
            INP1 => Some(self.port1()),
            INP2 => Some(self.port2()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latches() -> InputLatches {
        InputLatches::new(
            ShipSwitch::Three,
            ExtraLifeSwitch::OneThousandFiveHundred,
            DemoCoinInfoSwitch::On,
        )
    }

    #[test]
    fn idle_port1_has_coin_high_and_bit3_set() {
        assert_eq!(latches().port1(), 0b0000_1001);
    }

    #[test]
    fn player_one_start_sets_bit2_only() {
        let mut controls = latches();
        let idle = controls.port1();

        controls.press(Button::Start(Player::One));
        assert_eq!(controls.port1(), idle | 0b100);
        assert_eq!(controls.port2(), latches().port2());

        controls.release(Button::Start(Player::One));
        assert_eq!(controls.port1(), idle);
    }

    #[test]
    fn coin_is_active_low() {
        let mut controls = latches();
        controls.press(Button::Credit);
        assert_eq!(controls.port1() & 1, 0);
        controls.release(Button::Credit);
        assert_eq!(controls.port1() & 1, 1);
    }

    #[test]
    fn player_one_bits() {
        let mut controls = latches();
        controls.press(Button::Shoot(Player::One));
        controls.press(Button::Left(Player::One));
        controls.press(Button::Right(Player::One));
        controls.press(Button::Start(Player::Two));
        assert_eq!(controls.port1(), 0b0111_1011);
    }

    #[test]
    fn player_two_and_tilt_bits() {
        let mut controls = latches();
        controls.press(Button::Tilt);
        controls.press(Button::Shoot(Player::Two));
        controls.press(Button::Left(Player::Two));
        controls.press(Button::Right(Player::Two));
        assert_eq!(controls.port2(), 0b0111_0100);
        assert!(controls.is_pressed(Button::Left(Player::Two)));
        assert!(!controls.is_pressed(Button::Left(Player::One)));
    }

    #[test]
    fn dip_switches_land_on_port2() {
        let controls = InputLatches::new(
            ShipSwitch::Six,
            ExtraLifeSwitch::OneThousand,
            DemoCoinInfoSwitch::Off,
        );
        assert_eq!(controls.port2(), 0b1000_1011);
    }

    #[test]
    fn reads_are_snapshots() {
        let mut controls = latches();
        controls.press(Button::Shoot(Player::One));
        assert_eq!(controls.on_read(INP1), controls.on_read(INP1));
        assert!(controls.is_pressed(Button::Shoot(Player::One)));
        assert_eq!(controls.on_read(0), None);
    }
}
