//! Builds an `ExtRef`, observes it, and manipulates it both through typed and reflective
//! accessors.

scl_rs::prelude! {}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .env()
        .without_timestamps()
        .init()?;

    let mut ext_ref = ExtRef::new();
    ext_ref.e_add_adapter(|n: &Notification| println!("| {}", n));

    println!("|==| typed setters");
    ext_ref.set_ied_name(Some("IED1"));
    ext_ref.set_ld_inst(Some("LD0"));
    ext_ref.set_ln_class(Some(LnClass::parse("XCBR")?));
    ext_ref.set_ln_inst(Some("1"));
    ext_ref.set_do_name(Some("Pos"));

    println!("|==| reflective setters");
    for (name, val) in [("daName", "stVal"), ("intAddr", "Pos;XCBR1/Pos/stVal")] {
        ext_ref.e_set_by_name(name, val.into())?;
    }
    let id = ext_ref.e_feature_id("intAddr")?;
    ext_ref.e_unset(id)?;

    println!("|==|");
    println!("{}", ext_ref);
    if let Some(reference) = ext_ref.object_reference() {
        println!("references `{}`", reference)
    }
    ext_ref.validate()?;

    let xswi = LnClass::parse("XSWI")?;
    if let Err(err) = ext_ref.e_set(Feature::DaName.id(), xswi.into()) {
        println!("an error occurred:");
        for line in err.to_string().lines() {
            println!("- {}", line)
        }
    }

    let proxy = ExtRef::new_proxy("station.scd#//@IED.0/@ExtRef.0");
    println!("{}", proxy);
    Ok(())
}
