use super::*;

#[test]
fn builtin_names_round_trip() {
    for builtin in Builtin::ALL {
        assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
    }
    assert_eq!(Builtin::from_name("Point"), None);
}

#[test]
fn builtins_admit_their_own_values() {
    let int = ClassRef::Builtin(Builtin::Int);
    assert_eq!(int.instance_check(&Value::Int(3)), Ok(true));
    assert_eq!(int.instance_check(&Value::string("3")), Ok(false));
    assert_eq!(int.instance_check(&Value::Float(3.0)), Ok(false));

    let none = ClassRef::Builtin(Builtin::NoneType);
    assert_eq!(none.instance_check(&Value::None), Ok(true));
    assert_eq!(none.instance_check(&Value::Int(0)), Ok(false));

    let dict = ClassRef::Builtin(Builtin::Dict);
    assert_eq!(dict.instance_check(&Value::map([])), Ok(true));
    assert_eq!(dict.instance_check(&Value::list(vec![])), Ok(false));
}

#[test]
fn bool_is_an_int_but_not_the_reverse() {
    let int = ClassRef::Builtin(Builtin::Int);
    let boolean = ClassRef::Builtin(Builtin::Bool);
    assert_eq!(int.instance_check(&Value::Bool(true)), Ok(true));
    assert_eq!(boolean.instance_check(&Value::Int(1)), Ok(false));
    assert!(boolean.is_subclass_of(&int));
    assert!(!int.is_subclass_of(&boolean));
}

#[test]
fn object_admits_everything() {
    let object = ClassRef::Builtin(Builtin::Object);
    let point = ClassRef::class("Point", []);
    for value in [
        Value::None,
        Value::Int(1),
        Value::list(vec![]),
        Value::instance(point, [("x", Value::Int(1))]),
    ] {
        assert_eq!(object.instance_check(&value), Ok(true));
    }
}

#[test]
fn nominal_subclassing() {
    let shape = ClassRef::class("Shape", []);
    let circle = ClassRef::class("Circle", [shape.clone()]);
    let unit_circle = ClassRef::class("UnitCircle", [circle.clone()]);
    let square = ClassRef::class("Square", [shape.clone()]);

    let value = Value::instance(unit_circle.clone(), [("r", Value::Int(1))]);
    assert_eq!(shape.instance_check(&value), Ok(true));
    assert_eq!(circle.instance_check(&value), Ok(true));
    assert_eq!(unit_circle.instance_check(&value), Ok(true));
    assert_eq!(square.instance_check(&value), Ok(false));
    assert_eq!(shape.instance_check(&Value::Int(1)), Ok(false));
}

#[test]
fn same_name_different_identity() {
    let a = ClassRef::class("Point", []);
    let b = ClassRef::class("Point", []);
    assert_ne!(a, b);
    let value = Value::instance(a, [("x", Value::Int(0))]);
    assert_eq!(b.instance_check(&value), Ok(false));
}

#[test]
fn user_class_deriving_from_builtin() {
    let dict = ClassRef::Builtin(Builtin::Dict);
    let ordered = ClassRef::class("OrderedDict", [dict.clone()]);
    let value = Value::instance(ordered, Vec::<(String, Value)>::new());
    assert_eq!(dict.instance_check(&value), Ok(true));
}

#[test]
fn runtime_checkable_protocol_is_structural() {
    let sized = ClassRef::protocol("HasName", ["name"], true);
    let user = ClassRef::class("User", []);
    let named = Value::instance(user.clone(), [("name", Value::string("ada"))]);
    let anonymous = Value::instance(user, [("id", Value::Int(7))]);
    assert!(sized.is_protocol());
    assert_eq!(sized.instance_check(&named), Ok(true));
    assert_eq!(sized.instance_check(&anonymous), Ok(false));
    assert_eq!(sized.instance_check(&Value::string("name")), Ok(false));
}

#[test]
fn plain_protocol_refuses_instance_checks() {
    let proto = ClassRef::protocol("Closeable", ["close"], false);
    let err = proto.instance_check(&Value::Int(1));
    assert_eq!(
        err,
        Err(InstanceCheckError::NotRuntimeCheckable {
            class: "Closeable".to_string()
        })
    );
    let message = err.map_err(|e| e.to_string()).err().unwrap_or_default();
    assert!(message.contains("Closeable"));
}

#[test]
fn debug_and_display() {
    let point = ClassRef::class("Point", []);
    assert_eq!(format!("{point:?}"), "<class 'Point'>");
    assert_eq!(ClassRef::Builtin(Builtin::Str).to_string(), "str");
    assert!(point.bases().is_empty());
}
