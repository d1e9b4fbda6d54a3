//! Transport assembled from a table of plain functions.
//!
//! Useful when the bus is driven by code that has no `embedded-hal`
//! implementation: the application fills in an [`I2cOps`] table and hands the
//! driver an [`OpsTransport`]. Each function returns a status, 0 for success.
//! Entries may be left out, in which case the driver refuses to bind to it.

use super::Transport;

pub type WriteFn<C> = fn(&mut C, u8, &[u8]) -> i32;
pub type ReadFn<C> = fn(&mut C, u8, &mut [u8]) -> i32;
pub type WriteReadFn<C> = fn(&mut C, u8, &[u8], &mut [u8]) -> i32;

pub struct I2cOps<C> {
    pub write: Option<WriteFn<C>>,
    pub read: Option<ReadFn<C>>,
    pub write_read: Option<WriteReadFn<C>>,
}

impl<C> I2cOps<C> {
    pub const fn new(write: WriteFn<C>, read: ReadFn<C>, write_read: WriteReadFn<C>) -> Self {
        Self {
            write: Some(write),
            read: Some(read),
            write_read: Some(write_read),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.write.is_some() && self.read.is_some() && self.write_read.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OpsError {
    /// The table has no entry for the requested operation.
    Missing,
    /// Non-zero status returned by the operation.
    Status(i32),
}

fn status(code: i32) -> Result<(), OpsError> {
    match code {
        0 => Ok(()),
        code => Err(OpsError::Status(code)),
    }
}

pub struct OpsTransport<'a, C> {
    ctx: &'a mut C,
    ops: &'a I2cOps<C>,
}

impl<'a, C> OpsTransport<'a, C> {
    pub fn new(ctx: &'a mut C, ops: &'a I2cOps<C>) -> Self {
        Self { ctx, ops }
    }

    pub fn context(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C> Transport for OpsTransport<'_, C> {
    type Error = OpsError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        let write = self.ops.write.ok_or(OpsError::Missing)?;
        status(write(self.ctx, address, bytes))
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let read = self.ops.read.ok_or(OpsError::Missing)?;
        status(read(self.ctx, address, buffer))
    }

    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        let write_read = self.ops.write_read.ok_or(OpsError::Missing)?;
        status(write_read(self.ctx, address, bytes, buffer))
    }

    fn is_complete(&self) -> bool {
        self.ops.is_complete()
    }
}
