//! command dispatcher
//! runs one top level command against the fixture and the store

use crate::cli::args::Command;
use crate::common::error::FixtureError;
use crate::common::setting;
use crate::controller::calibration::CalibrationEngine;
use crate::controller::color::{ColorController, ColourRequest};
use crate::controller::limit_dao::LimitDao;
use crate::driver::traits::FixtureDevice;
use crate::entity::channel::LimitSet;
use crate::{info, warn};

const LOG_TAG: &str = "Commander";

pub struct Commander<'a> {
    device: &'a dyn FixtureDevice,
    dao: &'a LimitDao,
    calibration: &'a setting::Calibration,
}

impl<'a> Commander<'a> {
    pub fn new(device: &'a dyn FixtureDevice, dao: &'a LimitDao, calibration: &'a setting::Calibration) -> Self {
        Commander { device, dao, calibration }
    }

    pub async fn execute(&self, command: &Command) -> Result<(), FixtureError> {
        info!(LOG_TAG, "execute {:?}", command);
        match command {
            Command::Long => {
                let limits = CalibrationEngine::new(self.device)
                    .calibrate(self.calibration.long_runs, true)
                    .await?;
                println!("limits: {}", limits);
            }
            Command::Calib => {
                let limits = self.calibrate_and_store().await?;
                println!("limits: {}", limits);
            }
            Command::Colour { fractions } => {
                let request = ColourRequest::from_fractions(fractions)?;
                // may calibrate, which leaves the level at 0, so it runs before level init
                let limits = self.load_or_calibrate().await?;
                let mut controller = ColorController::new(self.device, self.dao.load_level()?);
                controller.apply(&limits, request).await?;
                self.dao.save_level(controller.level())?;
            }
            Command::White => {
                let mut controller = ColorController::new(self.device, self.dao.load_level()?);
                controller.full().await?;
                self.dao.save_level(controller.level())?;
            }
            Command::Off => {
                let controller = ColorController::new(self.device, None);
                controller.off().await?;
            }
        }
        Ok(())
    }

    async fn calibrate_and_store(&self) -> Result<LimitSet, FixtureError> {
        let limits = CalibrationEngine::new(self.device)
            .calibrate(self.calibration.quick_runs, false)
            .await?;
        self.dao.save_limits(&limits)?;
        Ok(limits)
    }

    /// stored limits, or a fresh stored calibration when there are none
    async fn load_or_calibrate(&self) -> Result<LimitSet, FixtureError> {
        match self.dao.load_limits()? {
            Some(limits) => Ok(limits),
            None => {
                warn!(LOG_TAG, "no usable stored limits, calibrating");
                self.calibrate_and_store().await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::limit_dao::tests::temp_db;
    use crate::driver::dummy_fixture::{DummyFixture, FixtureCall};

    fn calibration() -> setting::Calibration {
        setting::Calibration { quick_runs: 3, long_runs: 4 }
    }

    #[tokio::test]
    async fn test_off_has_no_level_init() {
        let fixture = DummyFixture::new([100, 150, 200, 50]);
        let (_db_dir, db_path) = temp_db();
        let dao = LimitDao::new(&db_path).unwrap();
        dao.save_level(30).unwrap();
        let calibration = calibration();
        let commander = Commander::new(&fixture, &dao, &calibration);

        commander.execute(&Command::Off).await.unwrap();
        assert_eq!(fixture.calls(), vec![FixtureCall::SetChannels([0, 0, 0, 0])]);
    }

    #[tokio::test]
    async fn test_calib_stores_limits() {
        let fixture = DummyFixture::new([100, 150, 200, 50]);
        let (_db_dir, db_path) = temp_db();
        let dao = LimitDao::new(&db_path).unwrap();
        let calibration = calibration();
        let commander = Commander::new(&fixture, &dao, &calibration);

        commander.execute(&Command::Calib).await.unwrap();
        assert_eq!(dao.load_limits().unwrap(), Some(LimitSet([100, 150, 200, 50])));
        assert_eq!(fixture.level(), 0);
    }

    #[tokio::test]
    async fn test_long_discards_result() {
        let fixture = DummyFixture::new([100, 150, 200, 50]);
        let (_db_dir, db_path) = temp_db();
        let dao = LimitDao::new(&db_path).unwrap();
        let calibration = calibration();
        let commander = Commander::new(&fixture, &dao, &calibration);

        commander.execute(&Command::Long).await.unwrap();
        assert_eq!(dao.load_limits().unwrap(), None);
        let levels = fixture.calls().iter().filter(|c| matches!(c, FixtureCall::SetLevel(_))).count();
        assert_eq!(levels, 2);
    }

    #[tokio::test]
    async fn test_colour_uses_stored_limits() {
        let fixture = DummyFixture::new([0; 4]);
        let (_db_dir, db_path) = temp_db();
        let dao = LimitDao::new(&db_path).unwrap();
        dao.save_limits(&LimitSet([228, 214, 185, 184])).unwrap();
        let calibration = calibration();
        let commander = Commander::new(&fixture, &dao, &calibration);

        commander.execute(&Command::Colour { fractions: vec![0.5] }).await.unwrap();
        assert_eq!(
            fixture.calls(),
            vec![FixtureCall::SetLevel(255), FixtureCall::SetChannels([114, 107, 92, 92])]
        );
        assert_eq!(dao.load_level().unwrap(), Some(255));
    }

    #[tokio::test]
    async fn test_colour_calibrates_when_limits_missing() {
        let fixture = DummyFixture::new([100, 150, 200, 50]);
        let (_db_dir, db_path) = temp_db();
        let dao = LimitDao::new(&db_path).unwrap();
        dao.save_level(64).unwrap();
        let calibration = calibration();
        let commander = Commander::new(&fixture, &dao, &calibration);

        commander
            .execute(&Command::Colour { fractions: vec![1.0, 0.5, 0.0, 1.0] })
            .await
            .unwrap();

        assert_eq!(dao.load_limits().unwrap(), Some(LimitSet([100, 150, 200, 50])));
        let calls = fixture.calls();
        let tail = &calls[calls.len() - 3..];
        assert_eq!(
            tail,
            &[
                FixtureCall::SetLevel(0),
                FixtureCall::SetLevel(64),
                FixtureCall::SetChannels([100, 75, 0, 50]),
            ]
        );
        assert_eq!(fixture.level(), 64);
    }

    #[tokio::test]
    async fn test_colour_rejects_two_fractions() {
        let fixture = DummyFixture::new([100; 4]);
        let (_db_dir, db_path) = temp_db();
        let dao = LimitDao::new(&db_path).unwrap();
        let calibration = calibration();
        let commander = Commander::new(&fixture, &dao, &calibration);

        let result = commander.execute(&Command::Colour { fractions: vec![0.1, 0.2] }).await;
        assert!(matches!(result, Err(FixtureError::Config(_))));
        assert!(fixture.calls().is_empty());
    }

    #[tokio::test]
    async fn test_white_with_stored_zero_level() {
        let fixture = DummyFixture::new([100; 4]);
        let (_db_dir, db_path) = temp_db();
        let dao = LimitDao::new(&db_path).unwrap();
        dao.save_level(0).unwrap();
        let calibration = calibration();
        let commander = Commander::new(&fixture, &dao, &calibration);

        commander.execute(&Command::White).await.unwrap();
        assert_eq!(
            fixture.calls(),
            vec![FixtureCall::SetLevel(255), FixtureCall::SetChannels([255; 4])]
        );
        assert_eq!(dao.load_level().unwrap(), Some(255));
    }
}
