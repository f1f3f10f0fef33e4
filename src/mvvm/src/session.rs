use std::rc::Rc;

use eyre::eyre;
use mvvm_binding::{
    AdapterRegistry, Binder, BindingField, ObservableContext, ObservableObject, PropertyName,
    Union,
};

use crate::script::Statement;

/// Receives each line of output a session produces.
pub type Printer = Rc<dyn Fn(&str)>;

/// The binding field scripts bind properties to.
pub const ON_UPDATE: &str = "OnUpdate";

/// Replays script statements against a model and a single binder.
pub struct Session<'m> {
    model: &'m ObservableObject,
    registry: AdapterRegistry,
    binder: Binder<'m>,
    print: Printer,
}

impl<'m> Session<'m> {
    pub fn new(
        model: &'m ObservableObject,
        registry: AdapterRegistry,
        print: Printer,
    ) -> eyre::Result<Self> {
        let sink = print.clone();
        let field = BindingField::raw(ON_UPDATE, move |value| {
            sink(&format!("{ON_UPDATE}({}: {value})", value.kind()))
        });

        let mut binder = Binder::new(field);
        binder.set_context(model)?;

        Ok(Self {
            model,
            registry,
            binder,
            print,
        })
    }

    pub fn execute(&mut self, statement: &Statement<'_>) -> eyre::Result<()> {
        match *statement {
            Statement::Set {
                property,
                ty,
                literal,
            } => {
                let value = mvvm_union::parse(ty, literal)?;
                if !self.model.set(property, value) {
                    log::debug!("Property '{property}' is unchanged");
                }
            }

            Statement::Inc { property } => {
                let name = PropertyName::new(property);
                let current = self
                    .model
                    .get(&name)
                    .ok_or_else(|| eyre!("property '{property}' is not defined"))?;
                let next = increment(&current).ok_or_else(|| {
                    eyre!(
                        "property '{property}' holds a {} value, not an integer",
                        current.kind()
                    )
                })?;

                self.model.set(name, next);
            }

            Statement::Bind { field, property } => {
                self.binder.set_property_name(field, property)?;
            }

            Statement::Adapter {
                source,
                destination,
            } => {
                let entry = self
                    .registry
                    .find_by_name(source, destination)
                    .ok_or_else(|| eyre!("no adapter converts {source} to {destination}"))?;

                log::debug!("Using adapter '{}'", entry.label.label);
                self.binder.converter_mut().set_adapter(Some(entry.create()))?;
            }

            Statement::Passthrough => {
                if let Some(adapter) = self.binder.converter_mut().set_passthrough() {
                    log::debug!("Discarded {adapter:?}");
                }
            }

            Statement::Start => self.binder.start_listening()?,
            Statement::Stop => self.binder.stop_listening(),

            Statement::Refresh => {
                if !self.binder.refresh()? {
                    log::info!("Nothing to refresh for {ON_UPDATE}");
                }
            }

            Statement::Dump => {
                for (name, value) in self.model.properties() {
                    (self.print)(&format!("{name}: {} = {value}", value.kind()));
                }
            }
        }

        Ok(())
    }
}

fn increment(value: &Union) -> Option<Union> {
    let next = match *value {
        Union::I8(v) => Union::I8(v.wrapping_add(1)),
        Union::U8(v) => Union::U8(v.wrapping_add(1)),
        Union::I16(v) => Union::I16(v.wrapping_add(1)),
        Union::U16(v) => Union::U16(v.wrapping_add(1)),
        Union::I32(v) => Union::I32(v.wrapping_add(1)),
        Union::U32(v) => Union::U32(v.wrapping_add(1)),
        Union::I64(v) => Union::I64(v.wrapping_add(1)),
        Union::U64(v) => Union::U64(v.wrapping_add(1)),
        _ => return None,
    };

    Some(next)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{builtins, script};

    fn run(source: &str) -> eyre::Result<Vec<String>> {
        let output = Rc::new(RefCell::new(Vec::new()));
        let sink = output.clone();

        let model = ObservableObject::new();
        let mut session = Session::new(
            &model,
            builtins::registry()?,
            Rc::new(move |line: &str| sink.borrow_mut().push(line.to_owned())),
        )?;
        for line in script::parse(source)? {
            session.execute(&line.statement)?;
        }

        drop(session);
        Ok(output.take())
    }

    #[test]
    fn start_stop_start() -> eyre::Result<()> {
        let output = run("set IntField int 0\n\
             bind OnUpdate IntField\n\
             start\n\
             inc IntField\n\
             stop\n\
             inc IntField\n\
             start\n\
             inc IntField\n")?;

        assert_eq!(output, ["OnUpdate(i32: 1)", "OnUpdate(i32: 3)"]);
        Ok(())
    }

    #[test]
    fn adapters_convert_values() -> eyre::Result<()> {
        let output = run("bind OnUpdate Value\n\
             adapter float int\n\
             start\n\
             set Value float 2.6\n\
             passthrough\n\
             set Value float 1.5\n")?;

        assert_eq!(output, ["OnUpdate(i32: 3)", "OnUpdate(f32: 1.5)"]);
        Ok(())
    }

    #[test]
    fn refresh_and_dump() -> eyre::Result<()> {
        let output = run("set Name string Ada\n\
             set Flag bool true\n\
             bind OnUpdate Name\n\
             refresh\n\
             dump\n")?;

        assert_eq!(
            output,
            [
                "OnUpdate(object: Ada)",
                "Name: object = Ada",
                "Flag: bool = true"
            ]
        );
        Ok(())
    }

    #[test]
    fn failures() {
        assert!(run("start").is_err());
        assert!(run("inc Missing").is_err());
        assert!(run("set Flag bool true\ninc Flag").is_err());
        assert!(run("adapter string float").is_err());
        assert!(run("bind OnOther IntField").is_err());
        assert!(run("set IntField int nope").is_err());
    }
}
