use steglsb::{
    bits::{address_of, mask, BitCursor, Bits, BufferedBitSource, ReadBit},
    Error, Result,
};

static SOURCE: [u8; 8] = [0xA5, 0x3C, 0xF0, 0x0F, 0x81, 0x7E, 0x55, 0xAA];

#[test]
fn it_builds_masks() {
    assert_eq!(0b_0000_0000, mask(0));
    assert_eq!(0b_0000_0001, mask(1));
    assert_eq!(0b_0000_0111, mask(3));
    assert_eq!(0b_1111_1111, mask(8));
}

#[test]
#[should_panic]
fn it_rejects_masks_wider_than_a_byte() {
    let _ = mask(9);
}

#[test]
fn it_computes_addresses() -> Result<()> {
    let address = address_of(9, 2)?;
    assert_eq!((1, 1), address.into());
    assert_eq!(9, address.index());

    assert_eq!((0, 7), address_of(7, 1)?.into());

    assert!(matches!(
        address_of(16, 2),
        Err(Error::OutOfRange {
            byte_offset: 2,
            len: 2
        })
    ));

    Ok(())
}

#[test]
fn it_exhausts_the_cursor() -> Result<()> {
    let mut cursor = BitCursor::new(16);

    let mut addresses: Vec<(usize, u8)> = Vec::new();
    for _ in 0..16 {
        addresses.push(cursor.advance()?.into());
    }

    let expected: Vec<(usize, u8)> = (0..2)
        .flat_map(|byte| (0..8).map(move |bit| (byte, bit)))
        .collect();
    assert_eq!(expected, addresses);

    assert!(matches!(cursor.advance(), Err(Error::Exhausted)));
    assert!(matches!(cursor.address(), Err(Error::Exhausted)));
    assert_eq!(0, cursor.remaining_bits());

    Ok(())
}

#[test]
fn it_reads_the_address_without_advancing() -> Result<()> {
    let mut cursor = BitCursor::with_start(16, 9)?;

    assert_eq!((1, 1), cursor.address()?.into());
    assert_eq!((1, 1), cursor.address()?.into());
    assert_eq!((1, 1), cursor.advance()?.into());
    assert_eq!((1, 2), cursor.address()?.into());

    Ok(())
}

#[test]
fn it_iterates_from_a_start_offset() -> Result<()> {
    let mut cursor = BitCursor::with_start(16, 7)?;
    assert_eq!(9, cursor.len());

    let first: Vec<(usize, u8)> = cursor.by_ref().take(3).map(Into::into).collect();
    assert_eq!(vec![(0, 7), (1, 0), (1, 1)], first);
    assert_eq!(6, cursor.count());

    Ok(())
}

#[test]
fn it_resets_an_exhausted_cursor() {
    let mut cursor = BitCursor::new(8);
    cursor.by_ref().for_each(drop);
    assert!(cursor.is_exhausted());

    cursor.reset();
    assert_eq!(Some((0, 0)), cursor.next().map(Into::into));
}

#[test]
fn it_rejects_start_past_capacity() {
    assert!(matches!(
        BitCursor::with_start(16, 17),
        Err(Error::InvalidRange {
            index: 17,
            capacity: 16
        })
    ));

    assert!(BitCursor::with_start(16, 16).is_ok_and(|cursor| cursor.is_exhausted()));
}

#[test]
fn it_shifts_within_bounds() -> Result<()> {
    let mut cursor = BitCursor::with_start(16, 8)?;

    cursor.shift(-8)?;
    assert_eq!(0, cursor.index());

    assert!(matches!(cursor.shift(-1), Err(Error::InvalidRange { index: -1, .. })));
    assert_eq!(0, cursor.index());

    cursor.shift(16)?;
    assert!(cursor.is_exhausted());
    assert!(cursor.shift(1).is_err());

    Ok(())
}

#[test]
fn it_orders_cursors_by_position_only() -> Result<()> {
    let short = BitCursor::with_start(16, 4)?;
    let long = BitCursor::with_start(64, 4)?;

    assert_eq!(short, long);
    assert_ne!(short.capacity_bits(), long.capacity_bits());

    let further = BitCursor::with_start(8, 6)?;
    assert!(short < further);
    assert_eq!(2, further.offset_from(&short));
    assert_eq!(-2, short.offset_from(&further));

    Ok(())
}

#[test]
fn it_reads_bits_from_a_slice() -> Result<()> {
    let mut bits = Bits::new(&[0b_1000_0001]);

    let read: Vec<u8> = (0..8).map(|_| bits.read_bit()).collect::<Result<_>>()?;
    assert_eq!(vec![1, 0, 0, 0, 0, 0, 0, 1], read);

    assert_eq!(0, bits.remaining_bits());
    assert!(matches!(bits.read_bit(), Err(Error::EndOfSource)));

    Ok(())
}

#[test]
fn it_slides_and_refills_the_window() -> Result<()> {
    let mut source = BufferedBitSource::with_start(2, 7, SOURCE.as_slice())?;
    assert_eq!([0xA5, 0x3C], source.window());

    // last bit of 0xA5
    assert_eq!(1, source.read_bit()?);
    assert_eq!((1, 0), source.position()?.into());

    source.refill()?;
    assert_eq!([0x3C, 0xF0], source.window());
    assert_eq!((0, 0), source.position()?.into());

    assert_eq!(vec![0x3C], source.read_bits(8)?);
    assert_eq!(vec![0xF0], source.read_bits(8)?);

    Ok(())
}

#[test]
fn it_keeps_the_bit_offset_when_sliding() -> Result<()> {
    let mut source = BufferedBitSource::with_start(2, 11, SOURCE.as_slice())?;

    source.refill()?;
    assert_eq!([0x3C, 0xF0], source.window());
    assert_eq!((0, 3), source.position()?.into());

    // low five bits of 0x3C, then the high three of 0xF0
    assert_eq!(vec![0b_1110_0111], source.read_bits(8)?);

    Ok(())
}

#[test]
fn it_refills_transparently_while_reading() -> Result<()> {
    let mut source = BufferedBitSource::with_capacity(3, SOURCE.as_slice())?;

    assert_eq!(SOURCE.to_vec(), source.read_bits(64)?);
    assert!(source.is_end_of_source()?);
    assert!(matches!(source.read_bit(), Err(Error::EndOfSource)));

    Ok(())
}

#[test]
fn it_packs_partial_bytes_msb_first() -> Result<()> {
    let mut source = BufferedBitSource::with_capacity(1, SOURCE.as_slice())?;

    assert_eq!(vec![0xA5, 0b_0010_0000], source.read_bits(11)?);
    assert!(source.read_bits(0)?.is_empty());

    Ok(())
}

#[test]
fn it_probes_end_of_source_without_consuming() -> Result<()> {
    let bytes = [0x0F, 0xF0];
    let mut source = BufferedBitSource::with_capacity(1, bytes.as_slice())?;

    assert!(!source.is_end_of_source()?);
    assert!(!source.is_end_of_source()?);

    assert_eq!(vec![0x0F, 0xF0], source.read_bits(16)?);
    assert!(source.is_end_of_source()?);

    Ok(())
}

#[test]
fn it_fails_when_refilling_an_exhausted_source() -> Result<()> {
    let mut source = BufferedBitSource::with_capacity(8, SOURCE.as_slice())?;

    assert!(matches!(source.refill(), Err(Error::EndOfSource)));
    assert_eq!(SOURCE, source.window());
    assert_eq!(64, source.buffered_bits());

    Ok(())
}

#[test]
fn it_reports_reads_past_the_source() -> Result<()> {
    let mut source = BufferedBitSource::with_capacity(4, SOURCE.as_slice())?;
    source.read_bits(60)?;

    assert!(matches!(
        source.read_bits(8),
        Err(Error::InvalidArgument {
            requested: 8,
            available: 4
        })
    ));

    Ok(())
}

#[test]
fn it_serves_short_sources() -> Result<()> {
    let bytes = [0xC3];
    let mut source = BufferedBitSource::new(bytes.as_slice())?;

    assert_eq!(4096, source.capacity());
    assert_eq!([0xC3], source.window());
    assert_eq!(vec![0xC3], source.read_bits(8)?);
    assert!(matches!(source.read_bit(), Err(Error::EndOfSource)));

    Ok(())
}
